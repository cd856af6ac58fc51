//! HTTP routes for teacher quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    answer_question, create_session, get_session, next_question, restart_session,
    TeacherQuizHandlers,
};

/// Creates the teacher quiz router. Mounted at `/api/teacher-quiz/sessions`.
pub fn teacher_quiz_routes(handlers: TeacherQuizHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_session))
        .route("/:id/answer", post(answer_question))
        .route("/:id/next", post(next_question))
        .route("/:id/restart", post(restart_session))
        .with_state(handlers)
}

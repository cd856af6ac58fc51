//! HTTP handlers for teacher quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::adapters::http::error::{
    generation_error_response, quiz_error_response, validation_error_response, ErrorResponse,
};
use crate::application::handlers::GenerateTeacherQuizHandler;
use crate::domain::quiz::{QuizRequest, TeacherQuiz};

use super::dto::{AnswerRequest, AnswerResponse, CreateQuizSessionRequest, QuizSessionResponse};
use super::store::QuizSessionStore;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TeacherQuizHandlers {
    generate_handler: Arc<GenerateTeacherQuizHandler>,
    sessions: QuizSessionStore,
}

impl TeacherQuizHandlers {
    pub fn new(generate_handler: Arc<GenerateTeacherQuizHandler>, sessions: QuizSessionStore) -> Self {
        Self {
            generate_handler,
            sessions,
        }
    }
}

fn session_not_found(id: &Uuid) -> Response {
    ErrorResponse::not_found("Cuestionario", &id.to_string()).with_status(StatusCode::NOT_FOUND)
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/teacher-quiz/sessions - Generate questions and start a quiz
pub async fn create_session(
    State(handlers): State<TeacherQuizHandlers>,
    Json(req): Json<CreateQuizSessionRequest>,
) -> Response {
    let request = match QuizRequest::new(req.question_count) {
        Ok(request) => request,
        Err(e) => return validation_error_response(e),
    };

    let questions = match handlers.generate_handler.generate(request).await {
        Ok(questions) => questions,
        Err(e) => return generation_error_response(e),
    };

    let mut quiz = TeacherQuiz::default();
    if let Err(e) = quiz.start(questions) {
        return quiz_error_response(e);
    }

    let id = handlers.sessions.insert(quiz.clone()).await;
    tracing::info!(session_id = %id, questions = quiz.total(), "teacher quiz started");

    (StatusCode::CREATED, Json(QuizSessionResponse::new(id, &quiz))).into_response()
}

/// GET /api/teacher-quiz/sessions/:id - Current quiz state
pub async fn get_session(
    State(handlers): State<TeacherQuizHandlers>,
    Path(id): Path<Uuid>,
) -> Response {
    match handlers.sessions.get(&id).await {
        Some(quiz) => (StatusCode::OK, Json(QuizSessionResponse::new(id, &quiz))).into_response(),
        None => session_not_found(&id),
    }
}

/// POST /api/teacher-quiz/sessions/:id/answer - Answer the current question
pub async fn answer_question(
    State(handlers): State<TeacherQuizHandlers>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let outcome = handlers
        .sessions
        .update(&id, |quiz| {
            quiz.select_option(req.option)
                .map(|feedback| (feedback, QuizSessionResponse::new(id, quiz)))
        })
        .await;

    match outcome {
        Some(Ok((feedback, session))) => {
            (StatusCode::OK, Json(AnswerResponse { feedback, session })).into_response()
        }
        Some(Err(e)) => quiz_error_response(e),
        None => session_not_found(&id),
    }
}

/// POST /api/teacher-quiz/sessions/:id/next - Next question or results
pub async fn next_question(
    State(handlers): State<TeacherQuizHandlers>,
    Path(id): Path<Uuid>,
) -> Response {
    let outcome = handlers
        .sessions
        .update(&id, |quiz| {
            quiz.advance().map(|_| QuizSessionResponse::new(id, quiz))
        })
        .await;

    match outcome {
        Some(Ok(session)) => (StatusCode::OK, Json(session)).into_response(),
        Some(Err(e)) => quiz_error_response(e),
        None => session_not_found(&id),
    }
}

/// POST /api/teacher-quiz/sessions/:id/restart - Discard a finished quiz
pub async fn restart_session(
    State(handlers): State<TeacherQuizHandlers>,
    Path(id): Path<Uuid>,
) -> Response {
    let outcome = handlers
        .sessions
        .update(&id, |quiz| {
            quiz.restart().map(|_| QuizSessionResponse::new(id, quiz))
        })
        .await;

    match outcome {
        Some(Ok(session)) => {
            handlers.sessions.remove(&id).await;
            (StatusCode::OK, Json(session)).into_response()
        }
        Some(Err(e)) => quiz_error_response(e),
        None => session_not_found(&id),
    }
}

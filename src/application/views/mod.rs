//! View controllers.
//!
//! Each view owns its form input and the state of its single in-flight
//! request. Views share no state with each other.

mod assessment;
mod planner;
mod request_state;
mod shell;
mod teacher_quiz;

pub use assessment::{
    AssessmentInput, AssessmentView, HIDE_ANSWER_KEY_LABEL, SHOW_ANSWER_KEY_LABEL,
};
pub use planner::{PlannerInput, PlannerView};
pub use request_state::{RequestState, RequestStateError, RequestStatus};
pub use shell::{Section, Shell, UnknownSection};
pub use teacher_quiz::{TeacherQuizView, NEXT_QUESTION_LABEL, SHOW_RESULTS_LABEL};

//! Request lifecycle shared by the planner and assessment views.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{StateMachine, TransitionError};

/// Coarse status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl StateMachine for RequestStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            // A form can be rejected locally before anything is sent.
            Idle => vec![Submitting, Failed],
            Submitting => vec![Succeeded, Failed],
            Succeeded => vec![Submitting, Failed],
            Failed => vec![Submitting, Failed],
        }
    }
}

/// Raised when a submission is attempted while another is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestStateError {
    #[error("a request is already in flight")]
    Busy,

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),
}

/// One view's request, holding its result or error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Submitting,
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn status(&self) -> RequestStatus {
        match self {
            RequestState::Idle => RequestStatus::Idle,
            RequestState::Submitting => RequestStatus::Submitting,
            RequestState::Succeeded(_) => RequestStatus::Succeeded,
            RequestState::Failed(_) => RequestStatus::Failed,
        }
    }

    /// True while a request is in flight; the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    /// Starts a submission, dropping the previous result or error.
    pub fn begin(&mut self) -> Result<(), RequestStateError> {
        if self.is_busy() {
            return Err(RequestStateError::Busy);
        }
        self.status().transition_to(RequestStatus::Submitting)?;
        *self = RequestState::Submitting;
        Ok(())
    }

    /// Stores the result of the in-flight request.
    pub fn succeed(&mut self, value: T) -> Result<(), RequestStateError> {
        self.status().transition_to(RequestStatus::Succeeded)?;
        *self = RequestState::Succeeded(value);
        Ok(())
    }

    /// Ends the in-flight request with a message for the teacher.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), RequestStateError> {
        self.status().transition_to(RequestStatus::Failed)?;
        *self = RequestState::Failed(message.into());
        Ok(())
    }

    /// Records a local rejection; the model is never called.
    pub fn reject(&mut self, message: impl Into<String>) -> Result<(), RequestStateError> {
        if self.is_busy() {
            return Err(RequestStateError::Busy);
        }
        self.fail(message)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_replaces_result() {
        let mut state = RequestState::default();
        state.begin().unwrap();
        assert!(state.is_busy());
        state.succeed(1).unwrap();
        assert_eq!(state.result(), Some(&1));

        state.begin().unwrap();
        assert_eq!(state.result(), None);
        state.succeed(2).unwrap();
        assert_eq!(state.result(), Some(&2));
    }

    #[test]
    fn second_submission_while_busy_is_refused() {
        let mut state: RequestState<()> = RequestState::default();
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(RequestStateError::Busy));
        assert_eq!(state.reject("x"), Err(RequestStateError::Busy));
    }

    #[test]
    fn failure_keeps_message_and_allows_resubmission() {
        let mut state: RequestState<()> = RequestState::default();
        state.begin().unwrap();
        state.fail("Error al generar la evaluación.").unwrap();
        assert_eq!(state.error(), Some("Error al generar la evaluación."));

        state.begin().unwrap();
        assert_eq!(state.status(), RequestStatus::Submitting);
    }

    #[test]
    fn success_without_submission_is_invalid() {
        let mut state = RequestState::default();
        assert!(matches!(
            state.succeed(5),
            Err(RequestStateError::InvalidTransition(_))
        ));
    }

    #[test]
    fn local_rejection_from_idle() {
        let mut state: RequestState<()> = RequestState::default();
        state.reject("El campo «Unidad» es obligatorio.").unwrap();
        assert_eq!(state.status(), RequestStatus::Failed);
    }

    #[test]
    fn no_status_is_terminal() {
        for status in [
            RequestStatus::Idle,
            RequestStatus::Submitting,
            RequestStatus::Succeeded,
            RequestStatus::Failed,
        ] {
            assert!(!status.is_terminal());
        }
    }
}

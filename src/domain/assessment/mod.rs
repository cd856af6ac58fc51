//! Formative assessments: the request form and the generated result.

mod form;
mod result;

pub use form::{
    AssessmentForm, DEFAULT_MULTIPLE_CHOICE, DEFAULT_OPEN_ENDED, MAX_MULTIPLE_CHOICE,
    MAX_OPEN_ENDED,
};
pub use result::{AssessmentQuestion, AssessmentResult, ConceptFocus, QuestionFormat};

#[cfg(test)]
pub(crate) use result::fixtures;

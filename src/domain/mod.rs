//! Domain layer: content types, validation rules and document composition.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait, option lettering)
//! - `schema` - Declared response schemas sent to the generative model
//! - `lesson` - Lesson planner form and generated lesson plan
//! - `assessment` - Assessment form and generated assessment
//! - `quiz` - Teacher practice quiz questions and session state machine
//! - `export` - Structured printable documents and filenames
//! - `reference` - Key concepts, model fundamentals and technique worksheets

pub mod assessment;
pub mod export;
pub mod foundation;
pub mod lesson;
pub mod quiz;
pub mod reference;
pub mod schema;

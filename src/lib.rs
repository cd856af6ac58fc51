//! Concept Studio - Concept-based teaching assistant
//!
//! This crate generates lesson plans, formative assessments and teacher
//! practice quizzes with a generative model, validates every reply against
//! a declared schema, and exports results as Word-compatible documents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

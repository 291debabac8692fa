//! Domain layer for quiz-model
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A [`Question`] is a quiz prompt with a title, a point value, a maximum
//! selection count and an ordered list of [`Choice`]s. Choices are created
//! and removed only through their question.
//!
//! ## Selection
//!
//! A respondent submits a list of [`ChoiceId`]s; [`Question::select_choices`]
//! returns the ones that point at correct choices.

pub mod config;
pub mod core;
pub mod question;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use question::{
    entities::{Choice, Question},
    validation::{CHOICE_TEXT_MAX_CHARS, TITLE_MAX_CHARS, validate_choice_text, validate_title},
    value_objects::{ChoiceId, QuestionId},
};

//! Application layer for quiz-model
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuestionDefaults;
pub use ports::question_source::{QuestionSource, QuestionSourceError};
pub use use_cases::build_question::{
    BuildQuestionError, BuildQuestionUseCase, ChoiceDraft, QuestionDraft,
};
pub use use_cases::check_selection::{
    CheckSelectionError, CheckSelectionUseCase, SelectionOutcome,
};

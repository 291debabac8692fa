//! Question source port.
//!
//! Defines where question drafts come from. Infrastructure adapters
//! implement this to read definitions from files or other inputs.

use crate::use_cases::build_question::QuestionDraft;
use thiserror::Error;

/// Errors that can occur while loading a question draft.
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    /// The source could not be read (missing file, permissions, ...)
    #[error("Question source unavailable: {0}")]
    Unavailable(String),

    /// The source was read but does not describe a valid draft
    #[error("Malformed question definition: {0}")]
    Malformed(String),
}

/// Port for loading question drafts.
pub trait QuestionSource: Send + Sync {
    /// Short human-readable description, e.g. the file path
    fn describe(&self) -> String;

    /// Load the draft.
    fn load(&self) -> Result<QuestionDraft, QuestionSourceError>;
}

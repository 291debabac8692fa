//! Check Selection use case.
//!
//! Runs a respondent's selection against a [`Question`] and reports which
//! selected ids are correct.

use quiz_domain::{ChoiceId, DomainError, Question};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while checking a selection.
#[derive(Error, Debug)]
pub enum CheckSelectionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of checking one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    /// Ids as submitted
    pub selected: Vec<ChoiceId>,
    /// Submitted ids that point at correct choices, in submission order
    pub correct: Vec<ChoiceId>,
    /// More ids were submitted than the question's `max_selections`
    pub exceeds_max_selections: bool,
}

/// Use case for checking a selection.
///
/// The domain does not enforce `max_selections` when selecting; this use
/// case reports an over-limit selection as a warning and a flag on the
/// outcome rather than rejecting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckSelectionUseCase;

impl CheckSelectionUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        question: &Question,
        selected: Vec<ChoiceId>,
    ) -> Result<SelectionOutcome, CheckSelectionError> {
        let correct = question.select_choices(&selected)?;

        let exceeds_max_selections =
            u32::try_from(selected.len()).map_or(true, |n| n > question.max_selections());
        if exceeds_max_selections {
            warn!(
                "Question {}: {} choices selected but max_selections is {}",
                question.id(),
                selected.len(),
                question.max_selections()
            );
        }

        info!(
            "Question {}: {}/{} selected choices are correct",
            question.id(),
            correct.len(),
            selected.len()
        );

        Ok(SelectionOutcome {
            selected,
            correct,
            exceeds_max_selections,
        })
    }
}

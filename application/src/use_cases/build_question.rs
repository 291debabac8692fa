//! Build Question use case.
//!
//! Turns a [`QuestionDraft`] (plain data, usually read from a file) into a
//! validated [`Question`] by replaying it through the domain operations.

use crate::config::QuestionDefaults;
use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use quiz_domain::{ChoiceId, DomainError, Question};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a question.
#[derive(Error, Debug)]
pub enum BuildQuestionError {
    #[error("Failed to load question: {0}")]
    Source(#[from] QuestionSourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One answer option in a [`QuestionDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDraft {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl ChoiceDraft {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// Unvalidated description of a question.
///
/// `correct_ids` refers to choices by the ids they will receive, i.e. their
/// 1-based position in `choices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub title: String,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub max_selections: Option<u32>,
    #[serde(default)]
    pub choices: Vec<ChoiceDraft>,
    #[serde(default)]
    pub correct_ids: Vec<ChoiceId>,
}

impl QuestionDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_choice(mut self, text: impl Into<String>, correct: bool) -> Self {
        self.choices.push(ChoiceDraft::new(text, correct));
        self
    }

    pub fn with_correct_ids(mut self, ids: impl IntoIterator<Item = ChoiceId>) -> Self {
        self.correct_ids.extend(ids);
        self
    }
}

/// Use case for building a [`Question`] from a draft.
///
/// 1. Create the question (title check, fresh id)
/// 2. Apply points / max selections, falling back to [`QuestionDefaults`]
/// 3. Add choices in draft order
/// 4. Mark `correct_ids` via `set_correct_choices`
///
/// The first failing step aborts the build; no partial question is returned.
#[derive(Debug, Clone, Default)]
pub struct BuildQuestionUseCase {
    defaults: QuestionDefaults,
}

impl BuildQuestionUseCase {
    pub fn new(defaults: QuestionDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &QuestionDefaults {
        &self.defaults
    }

    pub fn execute(&self, draft: QuestionDraft) -> Result<Question, BuildQuestionError> {
        let mut question = Question::new(draft.title)?
            .with_points(draft.points.unwrap_or(self.defaults.points))
            .with_max_selections(draft.max_selections.unwrap_or(self.defaults.max_selections));

        for choice in draft.choices {
            let id = question.add_choice(choice.text, choice.correct)?;
            debug!("Question {}: added choice {}", question.id(), id);
        }

        if !draft.correct_ids.is_empty() {
            question.set_correct_choices(&draft.correct_ids)?;
        }

        info!(
            "Built question {} with {} choices ({} correct)",
            question.id(),
            question.choices().len(),
            question.correct_choice_ids().len()
        );

        Ok(question)
    }

    /// Load a draft from `source` and build it.
    pub fn execute_from(&self, source: &dyn QuestionSource) -> Result<Question, BuildQuestionError> {
        debug!("Loading question from {}", source.describe());
        let draft = source.load()?;
        self.execute(draft)
    }
}

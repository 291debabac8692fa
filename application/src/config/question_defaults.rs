//! Question defaults — values applied when a draft leaves a field out.
//!
//! [`QuestionDefaults`] is filled from the `[question]` config section and
//! handed to [`BuildQuestionUseCase`](crate::use_cases::build_question::BuildQuestionUseCase).

use quiz_domain::Question;
use serde::{Deserialize, Serialize};

/// Fallback points and max selections for new questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefaults {
    /// Points for a question whose draft has none.
    pub points: i32,
    /// Max selections for a question whose draft has none.
    pub max_selections: u32,
}

impl Default for QuestionDefaults {
    fn default() -> Self {
        Self {
            points: Question::DEFAULT_POINTS,
            max_selections: Question::DEFAULT_MAX_SELECTIONS,
        }
    }
}

impl QuestionDefaults {
    // ==================== Builder Methods ====================

    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max: u32) -> Self {
        self.max_selections = max;
        self
    }
}

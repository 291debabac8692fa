//! Question defaults from TOML (`[question]` section)

use quiz_application::QuestionDefaults;
use quiz_domain::Question;
use serde::{Deserialize, Serialize};

/// Raw question defaults from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionConfig {
    /// Points for questions that do not set their own
    pub default_points: i32,
    /// Max selections for questions that do not set their own
    pub default_max_selections: u32,
}

impl Default for FileQuestionConfig {
    fn default() -> Self {
        Self {
            default_points: Question::DEFAULT_POINTS,
            default_max_selections: Question::DEFAULT_MAX_SELECTIONS,
        }
    }
}

impl FileQuestionConfig {
    pub fn to_question_defaults(&self) -> QuestionDefaults {
        QuestionDefaults::default()
            .with_points(self.default_points)
            .with_max_selections(self.default_max_selections)
    }
}

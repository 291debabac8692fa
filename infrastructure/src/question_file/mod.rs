//! TOML question definitions
//!
//! Reads a [`QuestionDraft`] from a file shaped like:
//!
//! ```toml
//! title = "Which of these are primes?"
//! points = 2
//! max_selections = 2
//! correct_ids = [3]
//!
//! [[choices]]
//! text = "4"
//!
//! [[choices]]
//! text = "5"
//! correct = true
//!
//! [[choices]]
//! text = "7"
//! ```

use quiz_application::{QuestionDraft, QuestionSource, QuestionSourceError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`QuestionSource`] backed by a TOML file on disk
#[derive(Debug, Clone)]
pub struct TomlQuestionSource {
    path: PathBuf,
}

impl TomlQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a draft from TOML text
    pub fn parse(content: &str) -> Result<QuestionDraft, QuestionSourceError> {
        toml::from_str(content).map_err(|e| QuestionSourceError::Malformed(e.to_string()))
    }
}

impl QuestionSource for TomlQuestionSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<QuestionDraft, QuestionSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            QuestionSourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        debug!(
            "Read {} bytes of question definition from {}",
            content.len(),
            self.path.display()
        );
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::ChoiceDraft;
    use quiz_domain::ChoiceId;
    use std::io::Write;

    const PRIMES: &str = r#"
title = "Which of these are primes?"
points = 2
max_selections = 2
correct_ids = [3]

[[choices]]
text = "4"

[[choices]]
text = "5"
correct = true

[[choices]]
text = "7"
"#;

    #[test]
    fn test_parse_full_definition() {
        let draft = TomlQuestionSource::parse(PRIMES).unwrap();
        assert_eq!(draft.title, "Which of these are primes?");
        assert_eq!(draft.points, Some(2));
        assert_eq!(draft.max_selections, Some(2));
        assert_eq!(draft.correct_ids, vec![ChoiceId::new(3)]);
        assert_eq!(
            draft.choices,
            vec![
                ChoiceDraft::new("4", false),
                ChoiceDraft::new("5", true),
                ChoiceDraft::new("7", false),
            ]
        );
    }

    #[test]
    fn test_parse_minimal_definition() {
        let draft = TomlQuestionSource::parse(r#"title = "q1""#).unwrap();
        assert_eq!(draft.title, "q1");
        assert!(draft.points.is_none());
        assert!(draft.choices.is_empty());
    }

    #[test]
    fn test_parse_missing_title_is_malformed() {
        let err = TomlQuestionSource::parse("points = 3").unwrap_err();
        assert!(matches!(err, QuestionSourceError::Malformed(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", PRIMES).unwrap();

        let source = TomlQuestionSource::new(file.path());
        let draft = source.load().unwrap();
        assert_eq!(draft.choices.len(), 3);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlQuestionSource::new(dir.path().join("missing.toml"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, QuestionSourceError::Unavailable(_)));
    }
}

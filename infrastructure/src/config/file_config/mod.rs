//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod question;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use question::FileQuestionConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("question.default_max_selections cannot be 0")]
    ZeroMaxSelections,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Defaults for new questions
    pub question: FileQuestionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration.
    ///
    /// The domain accepts any max selections, but a default of 0 would make
    /// every non-empty selection over the limit.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.question.default_max_selections == 0 {
            return Err(ConfigValidationError::ZeroMaxSelections);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[question]
default_points = 2
default_max_selections = 3

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.question.default_points, 2);
        assert_eq!(config.question.default_max_selections, 3);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.question.default_points, 1);
        assert_eq!(config.question.default_max_selections, 1);
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_max_selections() {
        let mut config = FileConfig::default();
        config.question.default_max_selections = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroMaxSelections)
        );
    }
}

//! Configuration file loading for quiz-model
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileQuestionConfig,
};
pub use loader::ConfigLoader;

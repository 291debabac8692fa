//! Output format value object

use serde::{Deserialize, Serialize};

/// How question and selection results are rendered
///
/// Shared by the config file (`[output] format`) and the CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output (default)
    Text,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use quiz_domain::ChoiceId;
use std::path::PathBuf;

/// Output format for question and selection results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quiz_domain::OutputFormat::Text,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quiz
#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(author, version, about = "Inspect multiple-choice questions and check selections")]
#[command(long_about = r#"
Loads a multiple-choice question from a TOML definition file, validates it,
and either prints it or checks a respondent's selection against it.

Configuration files are loaded from (in priority order):
1. QUIZ_* environment variables
2. --config <path>     Explicit config file
3. ./quiz.toml         Project-level config
4. ~/.config/quiz/config.toml   Global config

Example:
  quiz show primes.toml
  quiz check primes.toml --select 2,3
  quiz -o json check primes.toml -s 1 -s 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format from config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a question and its choices
    Show {
        /// Question definition file (TOML)
        file: PathBuf,
    },
    /// Check which selected choices are correct
    Check {
        /// Question definition file (TOML)
        file: PathBuf,

        /// Selected choice ids (comma separated or repeated)
        #[arg(short, long, value_name = "ID", value_delimiter = ',', required = true)]
        select: Vec<ChoiceId>,
    },
}

//! CLI entrypoint for quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quiz_application::{BuildQuestionUseCase, CheckSelectionUseCase};
use quiz_domain::OutputFormat;
use quiz_infrastructure::{ConfigLoader, TomlQuestionSource};
use quiz_presentation::{Cli, Command, ConsoleFormatter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;
    debug!("Effective config: {:?}", config);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        bail!("A subcommand is required. Use --help for usage.");
    };

    // === Dependency Injection ===
    let builder = BuildQuestionUseCase::new(config.question.to_question_defaults());

    let output = match command {
        Command::Show { file } => {
            let question = builder.execute_from(&TomlQuestionSource::new(file))?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_question(&question),
                OutputFormat::Json => ConsoleFormatter::format_question_json(&question),
            }
        }
        Command::Check { file, select } => {
            let question = builder.execute_from(&TomlQuestionSource::new(file))?;
            info!("Checking selection against question {}", question.id());
            let outcome = CheckSelectionUseCase::new().execute(&question, select)?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_outcome(&question, &outcome),
                OutputFormat::Json => ConsoleFormatter::format_outcome_json(&question, &outcome),
            }
        }
    };

    println!("{}", output);

    Ok(())
}

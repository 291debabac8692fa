//! Console output formatter for questions and selection outcomes

use colored::Colorize;
use quiz_application::SelectionOutcome;
use quiz_domain::{ChoiceId, Question};

/// Formats questions and selection outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question with all of its choices, marking correct ones
    pub fn format_question(question: &Question) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("Question #{}:", question.id()).cyan().bold(),
            question.title()
        ));
        output.push_str(&format!(
            "{} {}  {} {}\n\n",
            "Points:".cyan(),
            question.points(),
            "Max selections:".cyan(),
            question.max_selections()
        ));

        if question.choices().is_empty() {
            output.push_str(&format!("  {}\n", "(no choices)".dimmed()));
        }

        for choice in question.choices() {
            let label = format!("[{}]", choice.id());
            if choice.is_correct() {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    label.green().bold(),
                    choice.text(),
                    "(correct)".green()
                ));
            } else {
                output.push_str(&format!("  {} {}\n", label.yellow(), choice.text()));
            }
        }

        output
    }

    /// Format the result of checking a selection
    pub fn format_outcome(question: &Question, outcome: &SelectionOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Q:".bold(), question.title()));
        output.push_str(&format!(
            "{} {}\n",
            "Selected:".cyan().bold(),
            Self::join_ids(&outcome.selected)
        ));
        output.push_str(&format!(
            "{} {} ({}/{})\n",
            "Correct: ".green().bold(),
            Self::join_ids(&outcome.correct),
            outcome.correct.len(),
            outcome.selected.len()
        ));

        if outcome.exceeds_max_selections {
            output.push_str(&format!(
                "{} {} selected, but at most {} allowed\n",
                "Warning:".yellow().bold(),
                outcome.selected.len(),
                question.max_selections()
            ));
        }

        output
    }

    /// Format a question as JSON
    pub fn format_question_json(question: &Question) -> String {
        serde_json::to_string_pretty(question).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a selection outcome as JSON, tagged with the question id
    pub fn format_outcome_json(question: &Question, outcome: &SelectionOutcome) -> String {
        let value = serde_json::json!({
            "question_id": question.id(),
            "selected": outcome.selected,
            "correct": outcome.correct,
            "exceeds_max_selections": outcome.exceeds_max_selections,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn join_ids(ids: &[ChoiceId]) -> String {
        if ids.is_empty() {
            return "-".to_string();
        }
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

//! Guard checks for question input.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so
//! a 200-character title in any script is accepted.

use crate::core::error::DomainError;

/// Maximum number of characters in a question title.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum number of characters in a choice's text.
pub const CHOICE_TEXT_MAX_CHARS: usize = 100;

/// Check that a title is non-empty and at most [`TITLE_MAX_CHARS`] long.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let length = title.chars().count();
    if length == 0 || length > TITLE_MAX_CHARS {
        return Err(DomainError::InvalidTitle {
            length,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

/// Check that choice text is non-empty and at most [`CHOICE_TEXT_MAX_CHARS`] long.
pub fn validate_choice_text(text: &str) -> Result<(), DomainError> {
    let length = text.chars().count();
    if length == 0 || length > CHOICE_TEXT_MAX_CHARS {
        return Err(DomainError::InvalidChoiceText {
            length,
            max: CHOICE_TEXT_MAX_CHARS,
        });
    }
    Ok(())
}

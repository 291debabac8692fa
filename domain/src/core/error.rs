//! Domain error types

use crate::question::value_objects::ChoiceId;
use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a validation failure raised synchronously by a
/// [`Question`](crate::Question) operation. A failed call leaves the
/// question exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid title: length {length} is outside 1..={max} characters")]
    InvalidTitle { length: usize, max: usize },

    #[error("Invalid choice text: length {length} is outside 1..={max} characters")]
    InvalidChoiceText { length: usize, max: usize },

    #[error("Too many selections: {selected} selected but only {available} choices exist")]
    TooManySelections { selected: usize, available: usize },

    #[error("Choice {0} does not exist")]
    ChoiceNotFound(ChoiceId),
}

impl DomainError {
    /// Check if this error is a validation failure
    ///
    /// Always true today; callers that only care about the error kind
    /// should use this rather than matching variants.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTitle { .. }
                | DomainError::InvalidChoiceText { .. }
                | DomainError::TooManySelections { .. }
                | DomainError::ChoiceNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_not_found_display() {
        let error = DomainError::ChoiceNotFound(ChoiceId::new(3));
        assert_eq!(error.to_string(), "Choice 3 does not exist");
    }

    #[test]
    fn test_too_many_selections_display() {
        let error = DomainError::TooManySelections {
            selected: 2,
            available: 1,
        };
        assert_eq!(
            error.to_string(),
            "Too many selections: 2 selected but only 1 choices exist"
        );
    }

    #[test]
    fn test_all_errors_are_validation() {
        assert!(DomainError::InvalidTitle { length: 0, max: 200 }.is_validation());
        assert!(DomainError::InvalidChoiceText { length: 101, max: 100 }.is_validation());
        assert!(
            DomainError::TooManySelections {
                selected: 3,
                available: 2
            }
            .is_validation()
        );
        assert!(DomainError::ChoiceNotFound(ChoiceId::new(1)).is_validation());
    }
}

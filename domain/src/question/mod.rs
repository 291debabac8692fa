//! Multiple-choice questions.
//!
//! - [`entities::Question`] — a quiz prompt owning an ordered list of choices
//! - [`entities::Choice`] — an answer option, flagged correct or incorrect
//! - [`value_objects`] — question and choice identifiers
//! - [`validation`] — title and choice-text guards

pub mod entities;
pub mod validation;
pub mod value_objects;

pub use entities::{Choice, Question};
pub use value_objects::{ChoiceId, QuestionId};

//! Application-level configuration.
//!
//! - [`QuestionDefaults`] — points and max selections used when a draft omits them

pub mod question_defaults;

pub use question_defaults::QuestionDefaults;

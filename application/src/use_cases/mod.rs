//! Use cases (application services)

pub mod build_question;
pub mod check_selection;

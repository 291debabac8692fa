//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — validation errors raised by question operations

pub mod error;

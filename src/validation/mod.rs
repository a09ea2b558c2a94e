//! Field validation for rosterdb
//!
//! Every value is checked here before it may enter a `StudentRecord`.
//!
//! # Design Principles
//!
//! - Stateless and pure: no I/O, no store access
//! - Field-independent: no cross-field rules
//! - Aggregating: a submission reports every bad field, never just the first
//!
//! The single-field rules (`validate_*`) answer pass/fail. The `check_*`
//! forms additionally normalize the value and name the offending field.

mod errors;
mod rules;
mod submission;

pub use errors::{Field, FieldError, ValidationError, ValidationResult};
pub use rules::{
    check_age, check_email, check_grade, check_name, check_performance, coerce_age,
    validate_age, validate_email, validate_grade, validate_name, MAX_AGE, MIN_AGE,
};
pub use submission::{validate_partial, validate_stored, validate_submission, RawStudent};

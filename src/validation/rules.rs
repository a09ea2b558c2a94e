//! Single-field validation rules
//!
//! Rules:
//! - email: `local@domain.tld`, final segment at least two letters
//! - age: integer-coercible, 5..=100
//! - grade: one or two digits (1-99) then one letter, compared upper-cased
//! - name: non-empty after trimming
//! - performance: one of the four rating labels

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::errors::{Field, FieldError};
use crate::model::Performance;

/// Youngest accepted age
pub const MIN_AGE: i64 = 5;

/// Oldest accepted age
pub const MAX_AGE: i64 = 100;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const GRADE_PATTERN: &str = r"^[1-9][0-9]?[A-Z]$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn grade_regex() -> &'static Regex {
    static GRADE: OnceLock<Regex> = OnceLock::new();
    GRADE.get_or_init(|| Regex::new(GRADE_PATTERN).expect("grade pattern compiles"))
}

/// Returns true if `value` has the `local@domain.tld` shape.
///
/// No deliverability check is made.
pub fn validate_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Coerces a raw age value to an integer.
///
/// Integral JSON numbers and base-10 integer strings (surrounding
/// whitespace allowed) coerce. Fractional numbers are rejected rather than
/// truncated, so `12.5` is not read as `12`. Booleans and everything else
/// do not coerce.
pub fn coerce_age(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
                _ => None,
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Returns true if `value` coerces to an integer in `MIN_AGE..=MAX_AGE`.
pub fn validate_age(value: &Value) -> bool {
    coerce_age(value).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age))
}

/// Returns true if upper-cased `value` is a grade such as `10A` or `7B`.
pub fn validate_grade(value: &str) -> bool {
    grade_regex().is_match(&value.to_uppercase())
}

/// Returns true if `value` has any non-whitespace content.
pub fn validate_name(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates a name and returns it trimmed.
pub fn check_name(value: &str) -> Result<String, FieldError> {
    if validate_name(value) {
        Ok(value.trim().to_string())
    } else {
        Err(FieldError::rejected(Field::Name))
    }
}

/// Validates an age and returns it as an integer.
pub fn check_age(value: &Value) -> Result<u32, FieldError> {
    coerce_age(value)
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
        .and_then(|age| u32::try_from(age).ok())
        .ok_or_else(|| FieldError::rejected(Field::Age))
}

/// Validates an email and returns it trimmed.
pub fn check_email(value: &str) -> Result<String, FieldError> {
    if validate_email(value) {
        Ok(value.trim().to_string())
    } else {
        Err(FieldError::rejected(Field::Email))
    }
}

/// Validates a grade and returns it upper-cased.
pub fn check_grade(value: &str) -> Result<String, FieldError> {
    if validate_grade(value) {
        Ok(value.to_uppercase())
    } else {
        Err(FieldError::rejected(Field::Grade))
    }
}

/// Parses a performance label.
pub fn check_performance(value: &str) -> Result<Performance, FieldError> {
    value
        .parse::<Performance>()
        .map_err(|_| FieldError::rejected(Field::Performance))
}

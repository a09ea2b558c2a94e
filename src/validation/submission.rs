//! Whole-submission validation
//!
//! A submission is the raw set of values a user typed into a form. Every
//! field is checked, all failures are collected, and only a fully valid
//! submission yields normalized fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{Field, FieldError, ValidationError, ValidationResult};
use super::rules::{check_age, check_email, check_grade, check_name, check_performance};
use crate::model::{StudentFields, StudentPatch};

/// Raw, unvalidated field values.
///
/// Every field is kept as a JSON value so that a value of the wrong type
/// becomes an error on that field instead of failing the whole submission.
/// `age` may be a number or text; the other fields must be strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStudent {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub grade: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub performance: Option<Value>,
}

fn keep<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn required(value: Option<&Value>, field: Field) -> Result<&Value, FieldError> {
    value.ok_or_else(|| FieldError::rejected(field))
}

/// Checks a string-typed field; any other JSON type is rejected.
fn check_text<T>(
    value: &Value,
    field: Field,
    check: fn(&str) -> Result<T, FieldError>,
) -> Result<T, FieldError> {
    value
        .as_str()
        .ok_or_else(|| FieldError::rejected(field))
        .and_then(check)
}

/// Validates a complete submission.
///
/// Missing fields are rejected like invalid ones. Returns every field
/// error, in check order, if any field fails.
pub fn validate_submission(raw: &RawStudent) -> ValidationResult<StudentFields> {
    let mut errors = Vec::new();

    let name = keep(
        required(raw.name.as_ref(), Field::Name)
            .and_then(|v| check_text(v, Field::Name, check_name)),
        &mut errors,
    );
    let age = keep(
        required(raw.age.as_ref(), Field::Age).and_then(check_age),
        &mut errors,
    );
    let email = keep(
        required(raw.email.as_ref(), Field::Email)
            .and_then(|v| check_text(v, Field::Email, check_email)),
        &mut errors,
    );
    let grade = keep(
        required(raw.grade.as_ref(), Field::Grade)
            .and_then(|v| check_text(v, Field::Grade, check_grade)),
        &mut errors,
    );
    let performance = keep(
        required(raw.performance.as_ref(), Field::Performance)
            .and_then(|v| check_text(v, Field::Performance, check_performance)),
        &mut errors,
    );

    match (name, age, email, grade, performance) {
        (Some(name), Some(age), Some(email), Some(grade), Some(performance)) => Ok(StudentFields {
            name,
            age,
            grade,
            email,
            performance,
        }),
        _ => Err(ValidationError::new(errors)),
    }
}

/// Re-checks fields that were stored earlier.
///
/// Stored values must already be normalized, so a value that passes its
/// rule but would be rewritten (an untrimmed name, a lower-case grade) is
/// rejected as well.
pub fn validate_stored(fields: &StudentFields) -> ValidationResult<()> {
    let mut errors = Vec::new();
    let mut require = |ok: bool, field: Field| {
        if !ok {
            errors.push(FieldError::rejected(field));
        }
    };

    require(check_name(&fields.name).is_ok_and(|v| v == fields.name), Field::Name);
    require(check_age(&Value::from(fields.age)).is_ok(), Field::Age);
    require(check_email(&fields.email).is_ok_and(|v| v == fields.email), Field::Email);
    require(check_grade(&fields.grade).is_ok_and(|v| v == fields.grade), Field::Grade);

    match ValidationError::from_errors(errors) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validates the supplied subset of an update submission.
///
/// Absent fields are not checked and stay unset in the returned patch.
pub fn validate_partial(raw: &RawStudent) -> ValidationResult<StudentPatch> {
    let mut errors = Vec::new();

    let patch = StudentPatch {
        name: raw
            .name
            .as_ref()
            .and_then(|v| keep(check_text(v, Field::Name, check_name), &mut errors)),
        age: raw.age.as_ref().and_then(|v| keep(check_age(v), &mut errors)),
        email: raw
            .email
            .as_ref()
            .and_then(|v| keep(check_text(v, Field::Email, check_email), &mut errors)),
        grade: raw
            .grade
            .as_ref()
            .and_then(|v| keep(check_text(v, Field::Grade, check_grade), &mut errors)),
        performance: raw.performance.as_ref().and_then(|v| {
            keep(
                check_text(v, Field::Performance, check_performance),
                &mut errors,
            )
        }),
    };

    match ValidationError::from_errors(errors) {
        Some(err) => Err(err),
        None => Ok(patch),
    }
}

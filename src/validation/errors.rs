//! Validation error types
//!
//! Error code:
//! - ROSTER_VALIDATION_FAILED (REJECT)
//!
//! A `ValidationError` always carries at least one `FieldError`, in the
//! order the fields are checked: name, age, email, grade, performance.

use std::fmt;

/// The editable fields of a student record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Email,
    Grade,
    Performance,
}

impl Field {
    /// Returns the field name as it appears in records and requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
            Field::Grade => "grade",
            Field::Performance => "performance",
        }
    }

    /// Returns the user-facing message shown when this field is rejected
    pub fn message(&self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Age => "Age must be between 5 and 100",
            Field::Email => "Valid email is required",
            Field::Grade => "Grade must be in format like '10A', '11B'",
            Field::Performance => {
                "Performance must be one of: Excellent, Good, Average, Needs Improvement"
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    /// Creates the standard rejection for `field`
    pub fn rejected(field: Field) -> Self {
        Self {
            field,
            message: field.message().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Every field error from one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// Builds the aggregate error. Returns `None` when `errors` is empty so an
    /// empty `ValidationError` can never exist.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        "ROSTER_VALIDATION_FAILED"
    }

    /// Returns the individual field errors
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the rejected fields in check order
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Returns true if `field` was rejected
    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Returns the user-facing messages in check order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

impl From<FieldError> for ValidationError {
    fn from(err: FieldError) -> Self {
        Self { errors: vec![err] }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.messages().join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

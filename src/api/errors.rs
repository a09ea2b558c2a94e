//! API error types
//!
//! API errors are pass-through: they keep the code of the subsystem that
//! produced them (validation or store). Only malformed requests get an
//! API-level code.

use std::fmt;

use crate::store::StoreError;
use crate::validation::{FieldError, ValidationError};

/// API-level error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request line is not a valid request
    InvalidRequest,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "ROSTER_INVALID_REQUEST",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with the originating subsystem's code preserved
#[derive(Debug)]
pub struct ApiError {
    code: &'static str,
    message: String,
    /// Every rejected field, for validation failures
    field_errors: Vec<FieldError>,
    /// Caller error already logged where it was detected
    rejection: bool,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest.code(),
            message: reason.into(),
            field_errors: Vec::new(),
            rejection: false,
        }
    }

    /// Create from a validation error, keeping every field error
    pub fn from_validation_error(err: ValidationError) -> Self {
        Self {
            code: err.code(),
            message: err.messages().join("; "),
            field_errors: err.errors().to_vec(),
            rejection: true,
        }
    }

    /// Create from a store error (pass-through)
    pub fn from_store_error(err: StoreError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            field_errors: Vec::new(),
            rejection: err.is_rejection(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rejected fields, empty unless validation failed
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Returns true for invalid input or an id conflict, false for failures
    pub fn is_rejection(&self) -> bool {
        self.rejection
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

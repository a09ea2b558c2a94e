//! API response types
//!
//! JSON response formatting for all operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    /// Create a new success response
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("SuccessResponse serialization cannot fail")
    }
}

/// One rejected field in an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
    /// Every rejected field; omitted when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

impl ErrorResponse {
    /// Create from an API error
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
            errors: err
                .field_errors()
                .iter()
                .map(|e| FieldErrorBody {
                    field: e.field.as_str().to_string(),
                    message: e.message.clone(),
                })
                .collect(),
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ErrorResponse serialization cannot fail")
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        match self {
            Response::Success(r) => r.to_json(),
            Response::Error(r) => r.to_json(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Returns the payload of a success response
    pub fn data(&self) -> Option<&Value> {
        match self {
            Response::Success(r) => Some(&r.data),
            Response::Error(_) => None,
        }
    }

    /// Returns the error code of an error response
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, FieldError, ValidationError};
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let resp = Response::success(json!([{"name": "Alice"}]));
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("Alice"));
        assert!(resp.is_success());
    }

    #[test]
    fn test_error_response_omits_empty_field_list() {
        let err = ApiError::invalid_request("test error");
        let json = ErrorResponse::from_error(&err).to_json();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("ROSTER_INVALID_REQUEST"));
        assert!(!json.contains("\"errors\""));
    }

    #[test]
    fn test_error_response_lists_fields() {
        let validation = ValidationError::from_errors(vec![
            FieldError::rejected(Field::Name),
            FieldError::rejected(Field::Grade),
        ])
        .unwrap();
        let resp = Response::error(&ApiError::from_validation_error(validation));

        let parsed: Value = serde_json::from_str(&resp.to_json()).unwrap();
        assert_eq!(parsed["code"], "ROSTER_VALIDATION_FAILED");
        assert_eq!(parsed["errors"][0]["field"], "name");
        assert_eq!(parsed["errors"][1]["message"], "Grade must be in format like '10A', '11B'");
        assert_eq!(resp.error_code(), Some("ROSTER_VALIDATION_FAILED"));
    }
}

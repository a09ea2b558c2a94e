//! API layer for rosterdb
//!
//! The boundary the presentation layer talks to. It owns no rules of its
//! own: validation comes from `validation`, data access from `store`.
//!
//! # Supported Operations
//!
//! - add
//! - get
//! - list
//! - update
//! - delete
//! - search
//! - filter
//! - stats

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::RequestHandler;
pub use request::{QueryRequest, Request, ALL_PERFORMANCE};
pub use response::{ErrorResponse, FieldErrorBody, Response, SuccessResponse};

//! API request types
//!
//! One JSON object per request, tagged by `op`:
//!
//! ```text
//! {"op":"add","student":{"name":"Alice","age":15,"grade":"10a","email":"a@b.co","performance":"Good"}}
//! {"op":"update","student_id":"STU0001","student":{"name":"Alice Smith"}}
//! {"op":"filter","query":"smith","grade":"10A","min_age":10,"performance":"All"}
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use crate::store::StudentFilter;
use crate::validation::{check_performance, RawStudent};

/// Value the presentation layer sends for "no performance filter"
pub const ALL_PERFORMANCE: &str = "All";

/// Free-text query plus structured filter criteria, as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
    #[serde(default)]
    pub performance: Option<String>,
}

impl QueryRequest {
    /// Returns the search text, or "" when none was given
    pub fn query_text(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Converts the raw criteria into a filter.
    ///
    /// A blank grade and a blank or `All` performance mean "not filtered".
    pub fn to_filter(&self) -> ApiResult<StudentFilter> {
        let grade = self
            .grade
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_uppercase);

        let performance = match self.performance.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(p) if p.eq_ignore_ascii_case(ALL_PERFORMANCE) => None,
            Some(p) => Some(check_performance(p).map_err(|e| {
                ApiError::invalid_request(format!(
                    "Invalid performance filter '{}': {}",
                    p, e.message
                ))
            })?),
        };

        Ok(StudentFilter {
            grade,
            min_age: self.min_age,
            max_age: self.max_age,
            performance,
        })
    }
}

/// A parsed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Validate and insert a new student
    Add { student: RawStudent },
    /// Exact lookup
    Get { student_id: String },
    /// Every student in collection order
    List,
    /// Validate and overwrite the supplied fields
    Update {
        student_id: String,
        student: RawStudent,
    },
    Delete { student_id: String },
    /// Free-text search over name and email
    Search {
        #[serde(default)]
        query: String,
    },
    /// Structured filter, over search results when `query` is set
    Filter(QueryRequest),
    /// Summary statistics over the (optionally narrowed) collection
    Stats(QueryRequest),
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid request: {}", e)))
    }
}

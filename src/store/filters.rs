//! Free-text search and structured filtering over student records
//!
//! Both work on any sequence of records, so a filter can be applied to the
//! output of a search. Result order always follows input order.

use serde::{Deserialize, Serialize};

use crate::model::{Performance, StudentRecord};

/// Returns true if `record` matches a lower-cased search needle.
fn matches_text(record: &StudentRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle) || record.email.to_lowercase().contains(needle)
}

/// Case-insensitive substring search over name and email.
///
/// A blank query matches every record. Otherwise the query is matched as
/// given, surrounding whitespace included.
pub fn search<'a, I>(records: I, query: &str) -> Vec<&'a StudentRecord>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    if query.trim().is_empty() {
        return records.into_iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_text(r, &needle))
        .collect()
}

/// Structured filter criteria.
///
/// Every supplied criterion must hold (AND). Unset criteria are ignored,
/// so the default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilter {
    /// Exact grade, compared upper-cased
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Inclusive lower age bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Inclusive upper age bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
}

impl StudentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn min_age(mut self, age: u32) -> Self {
        self.min_age = Some(age);
        self
    }

    pub fn max_age(mut self, age: u32) -> Self {
        self.max_age = Some(age);
        self
    }

    pub fn performance(mut self, performance: Performance) -> Self {
        self.performance = Some(performance);
        self
    }

    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        self.grade.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.performance.is_none()
    }

    /// Checks a single record against all supplied criteria
    pub fn matches(&self, record: &StudentRecord) -> bool {
        if let Some(grade) = &self.grade {
            if record.grade.to_uppercase() != grade.to_uppercase() {
                return false;
            }
        }
        if self.min_age.is_some_and(|min| record.age < min) {
            return false;
        }
        if self.max_age.is_some_and(|max| record.age > max) {
            return false;
        }
        if self.performance.is_some_and(|p| record.performance != p) {
            return false;
        }
        true
    }

    /// Keeps the matching records, preserving order
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a StudentRecord>
    where
        I: IntoIterator<Item = &'a StudentRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

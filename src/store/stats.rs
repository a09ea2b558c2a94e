//! Summary statistics over a set of students

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{Performance, StudentRecord};

/// Headline figures shown under a student table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub total: usize,
    pub excellent: usize,
    /// Mean age rounded to one decimal; 0.0 for an empty set
    pub average_age: f64,
    pub distinct_grades: usize,
    /// Count per rating label, every label present
    pub by_performance: BTreeMap<String, usize>,
}

impl StudentSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a StudentRecord>,
    {
        let mut total = 0usize;
        let mut age_sum = 0u64;
        let mut grades = BTreeSet::new();
        let mut by_performance: BTreeMap<String, usize> = Performance::ALL
            .iter()
            .map(|p| (p.as_str().to_string(), 0))
            .collect();

        for record in records {
            total += 1;
            age_sum += u64::from(record.age);
            grades.insert(record.grade.as_str());
            *by_performance
                .entry(record.performance.as_str().to_string())
                .or_default() += 1;
        }

        let average_age = if total == 0 {
            0.0
        } else {
            (age_sum as f64 / total as f64 * 10.0).round() / 10.0
        };

        Self {
            total,
            excellent: by_performance
                .get(Performance::Excellent.as_str())
                .copied()
                .unwrap_or(0),
            average_age,
            distinct_grades: grades.len(),
            by_performance,
        }
    }
}

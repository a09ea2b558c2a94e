//! Student identifier generation
//!
//! Identifiers are `<prefix><suffix>`. The sequential strategy never hands
//! out a number at or below one it has already seen, so ids of deleted
//! students are not reused while the sequence is persisted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default identifier prefix
pub const DEFAULT_ID_PREFIX: &str = "STU";

/// How new identifiers are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `STU0001`, `STU0002`, ...
    #[default]
    Sequential,
    /// `STU` followed by 8 upper-case hex digits of a random UUID
    Uuid,
}

/// Produces identifiers distinct from a given set of taken ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    strategy: IdStrategy,
    next_sequence: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX, IdStrategy::Sequential)
    }
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>, strategy: IdStrategy) -> Self {
        Self {
            prefix: prefix.into(),
            strategy,
            next_sequence: 1,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// The next number the sequential strategy will try
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Moves the sequence forward to at least `sequence`. Never moves it back.
    pub fn resume_from(&mut self, sequence: u64) {
        self.next_sequence = self.next_sequence.max(sequence);
    }

    /// Records an id that now exists so the sequence skips past it.
    pub fn observe(&mut self, student_id: &str) {
        if let Some(n) = self.sequence_of(student_id) {
            self.resume_from(n.saturating_add(1));
        }
    }

    fn sequence_of(&self, student_id: &str) -> Option<u64> {
        let digits = student_id.strip_prefix(self.prefix.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns an id not present in `taken`.
    ///
    /// Uniqueness holds only against `taken` at the time of the call;
    /// insertion must still check for duplicates.
    pub fn generate(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Sequential => {
                    let n = self.next_sequence;
                    self.next_sequence = n.saturating_add(1);
                    format!("{}{:04}", self.prefix, n)
                }
                IdStrategy::Uuid => {
                    let token = Uuid::new_v4().simple().to_string();
                    format!("{}{}", self.prefix, token[..8].to_uppercase())
                }
            };

            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

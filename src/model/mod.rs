//! Student data model for rosterdb
//!
//! A `StudentRecord` is the only entity. Records are built from
//! already-validated `StudentFields` plus a store-assigned identifier,
//! and are mutated only through a `StudentPatch`.

mod performance;
mod record;

pub use performance::{ParsePerformanceError, Performance};
pub use record::{StudentFields, StudentPatch, StudentRecord};

//! Student record manager for rosterdb
//!
//! `StudentStore` is the single owner of the student collection. It
//! assigns identifiers, enforces id uniqueness, and answers exact,
//! free-text and structured queries by linear scan.
//!
//! # Design Principles
//!
//! - No field re-validation: callers validate before mutating
//! - Mutations are all-or-nothing, including the optional file write
//! - Search and filter are separate primitives that compose
//! - Every failure is a returned error, never a panic

mod checksum;
mod errors;
mod file;
mod filters;
mod ids;
mod stats;
mod store;

pub use errors::{StoreError, StoreResult};
pub use file::{StoreFile, StoredState, FORMAT_VERSION};
pub use filters::{search, StudentFilter};
pub use ids::{IdGenerator, IdStrategy, DEFAULT_ID_PREFIX};
pub use stats::StudentSummary;
pub use store::StudentStore;

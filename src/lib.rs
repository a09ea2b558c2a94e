//! rosterdb - A small, strict, single-user student record manager
//!
//! # Modules
//! - [`model`] - `StudentRecord` and the `Performance` rating
//! - [`validation`] - Stateless field rules with aggregated errors
//! - [`store`] - `StudentStore`: ids, uniqueness, search and filter
//! - [`api`] - JSON request handling for a presentation layer
//! - [`cli`] - `init` / `start` / `exec` commands
//! - [`observability`] - Structured JSON logging
//!
//! # Quick Start
//! ```
//! use rosterdb::store::{StudentFilter, StudentStore};
//! use rosterdb::model::StudentRecord;
//! use rosterdb::validation::{validate_submission, RawStudent};
//!
//! let raw = RawStudent {
//!     name: Some("Alice Smith".into()),
//!     age: Some(15.into()),
//!     grade: Some("10a".into()),
//!     email: Some("alice@example.com".into()),
//!     performance: Some("Good".into()),
//! };
//! let fields = validate_submission(&raw).unwrap();
//!
//! let mut store = StudentStore::in_memory();
//! let id = store.generate_student_id();
//! store.add_student(StudentRecord::new(id, fields)).unwrap();
//!
//! let found = store.query_students("smith", &StudentFilter::new().grade("10A"));
//! assert_eq!(found.len(), 1);
//! ```

pub mod api;
pub mod cli;
pub mod model;
pub mod observability;
pub mod store;
pub mod validation;

pub use model::{Performance, StudentFields, StudentPatch, StudentRecord};
pub use store::{StoreError, StudentFilter, StudentStore};
pub use validation::{ValidationError, validate_submission};

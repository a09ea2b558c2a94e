//! Observability for rosterdb
//!
//! Structured, synchronous JSON logging of lifecycle events, mutations and
//! rejections. Observability is read-only: it never changes the outcome of
//! an operation and never panics.
//!
//! # Usage
//!
//! ```ignore
//! use rosterdb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::StudentAdded, &[("student_id", "STU0001")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

//! Observable events for rosterdb
//!
//! Events are explicit and typed. Each maps to a stable log name.

use std::fmt;

use super::logger::Severity;

/// Observable events in rosterdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Student file created by `init`
    StoreInitialized,
    /// Student file loaded (or started empty)
    StoreOpened,
    /// Student file rewritten
    StoreSaved,
    /// Request loop ready
    Serving,

    // Mutations
    /// Student inserted
    StudentAdded,
    /// Student fields overwritten
    StudentUpdated,
    /// Student removed
    StudentDeleted,

    // Rejections
    /// Insert refused because the id is taken
    DuplicateIdRejected,
    /// Lookup, update or delete named an absent id
    StudentNotFound,
    /// Submission failed field validation
    ValidationRejected,
    /// Request could not be served
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreInitialized => "STORE_INITIALIZED",
            Event::StoreOpened => "STORE_OPENED",
            Event::StoreSaved => "STORE_SAVED",
            Event::Serving => "ROSTERDB_SERVING",

            Event::StudentAdded => "STUDENT_ADDED",
            Event::StudentUpdated => "STUDENT_UPDATED",
            Event::StudentDeleted => "STUDENT_DELETED",

            Event::DuplicateIdRejected => "DUPLICATE_ID_REJECTED",
            Event::StudentNotFound => "STUDENT_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreSaved => Severity::Trace,
            Event::DuplicateIdRejected | Event::StudentNotFound | Event::ValidationRejected => {
                Severity::Warn
            }
            Event::RequestFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

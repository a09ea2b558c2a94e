//! JSON file backing for the student store
//!
//! Layout:
//!
//! ```text
//! {
//!   "version": 1,
//!   "saved_at": "2026-10-15T09:30:00Z",
//!   "checksum": 2868144372,
//!   "next_sequence": 4,
//!   "students": [ { "student_id": "STU0001", ... }, ... ]
//! }
//! ```
//!
//! `checksum` is the CRC32 of the serialized `students` array. Saves write
//! `<file>.tmp`, sync it, then rename it over the target, so a crash mid-save
//! leaves the previous file intact.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checksum::compute_checksum;
use super::errors::{StoreError, StoreResult};
use crate::model::StudentRecord;
use crate::validation::validate_stored;

/// Current file format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    checksum: u32,
    next_sequence: u64,
    students: Vec<StudentRecord>,
}

/// Contents of a loaded student file
#[derive(Debug, Clone, PartialEq)]
pub struct StoredState {
    pub students: Vec<StudentRecord>,
    pub next_sequence: u64,
    pub saved_at: DateTime<Utc>,
}

/// A student file on disk
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Loads the file. Returns `Ok(None)` if it does not exist.
    ///
    /// # Errors
    ///
    /// - `Persistence` if the file cannot be read or parsed, has an unknown
    ///   version, or lists the same student id twice
    /// - `Corrupted` if the checksum does not match
    pub fn load(&self) -> StoreResult<Option<StoredState>> {
        if !self.exists() {
            return Ok(None);
        }

        let content =
            fs::read(&self.path).map_err(|e| StoreError::persistence("read", &self.path, e))?;
        let doc: StoreDocument = serde_json::from_slice(&content)
            .map_err(|e| StoreError::persistence("parse", &self.path, e))?;

        if doc.version != FORMAT_VERSION {
            return Err(StoreError::persistence(
                "load",
                &self.path,
                format!("unsupported format version {}", doc.version),
            ));
        }

        let body = serde_json::to_vec(&doc.students)
            .map_err(|e| StoreError::persistence("parse", &self.path, e))?;
        let actual = compute_checksum(&body);
        if actual != doc.checksum {
            return Err(StoreError::Corrupted {
                path: self.path.clone(),
                expected: doc.checksum,
                actual,
            });
        }

        let mut seen = HashSet::with_capacity(doc.students.len());
        for student in &doc.students {
            if !seen.insert(student.student_id.as_str()) {
                return Err(StoreError::persistence(
                    "load",
                    &self.path,
                    format!("duplicate student id '{}'", student.student_id),
                ));
            }
            if let Err(e) = validate_stored(&student.fields()) {
                return Err(StoreError::persistence(
                    "load",
                    &self.path,
                    format!("invalid student '{}': {}", student.student_id, e),
                ));
            }
        }

        Ok(Some(StoredState {
            students: doc.students,
            next_sequence: doc.next_sequence,
            saved_at: doc.saved_at,
        }))
    }

    /// Atomically replaces the file with `students`.
    pub fn save(&self, students: &[StudentRecord], next_sequence: u64) -> StoreResult<()> {
        let body = serde_json::to_vec(students)
            .map_err(|e| StoreError::persistence("serialize", &self.path, e))?;

        let doc = StoreDocument {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            checksum: compute_checksum(&body),
            next_sequence,
            students: students.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&doc)
            .map_err(|e| StoreError::persistence("serialize", &self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::persistence("create directory for", &self.path, e))?;
        }

        let temp = self.temp_path();
        let write_temp = || -> std::io::Result<()> {
            let mut file = File::create(&temp)?;
            file.write_all(&bytes)?;
            file.sync_all()
        };
        if let Err(e) = write_temp() {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::persistence("write", &temp, e));
        }

        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            StoreError::persistence("replace", &self.path, e)
        })
    }
}

//! The authoritative student collection
//!
//! Mutation flow:
//! 1. Check existence / uniqueness
//! 2. Apply to the in-memory collection
//! 3. Persist (file-backed stores only)
//! 4. On persist failure, restore the previous in-memory state
//!
//! Field values are never re-validated here; the caller validates first.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::file::StoreFile;
use super::filters::{search, StudentFilter};
use super::ids::IdGenerator;
use super::stats::StudentSummary;
use crate::model::{StudentPatch, StudentRecord};
use crate::observability::{log_event_with_fields, Event};

/// Owns every student record. Insertion order is kept.
#[derive(Debug)]
pub struct StudentStore {
    students: Vec<StudentRecord>,
    taken: HashSet<String>,
    ids: IdGenerator,
    file: Option<StoreFile>,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl StudentStore {
    /// Creates an empty store with no backing file and default ids.
    pub fn in_memory() -> Self {
        Self::with_id_generator(IdGenerator::default())
    }

    /// Creates an empty in-memory store using `ids`.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            students: Vec::new(),
            taken: HashSet::new(),
            ids,
            file: None,
        }
    }

    /// Opens a file-backed store. A missing file yields an empty store that
    /// is created on the first mutation.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` or `Corrupted` if an existing file is unusable.
    pub fn open(path: impl Into<PathBuf>, mut ids: IdGenerator) -> StoreResult<Self> {
        let file = StoreFile::new(path);
        let students = match file.load()? {
            Some(state) => {
                ids.resume_from(state.next_sequence);
                state.students
            }
            None => Vec::new(),
        };

        let mut taken = HashSet::with_capacity(students.len());
        for student in &students {
            ids.observe(&student.student_id);
            taken.insert(student.student_id.clone());
        }

        let count = students.len().to_string();
        let path = file.path().display().to_string();
        log_event_with_fields(
            Event::StoreOpened,
            &[("path", path.as_str()), ("students", count.as_str())],
        );

        Ok(Self {
            students,
            taken,
            ids,
            file: Some(file),
        })
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(StoreFile::path)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, student_id: &str) -> bool {
        self.taken.contains(student_id)
    }

    /// Writes the current state to the backing file, if any.
    pub fn save(&self) -> StoreResult<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        file.save(&self.students, self.ids.next_sequence())?;

        let count = self.students.len().to_string();
        let path = file.path().display().to_string();
        log_event_with_fields(
            Event::StoreSaved,
            &[("path", path.as_str()), ("students", count.as_str())],
        );
        Ok(())
    }

    /// Returns an id not used by any current record.
    ///
    /// `add_student` still rejects duplicates, so a generated id that is
    /// claimed by someone else before insertion is reported, not overwritten.
    pub fn generate_student_id(&mut self) -> String {
        self.ids.generate(&self.taken)
    }

    /// Inserts `record`.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if the id exists; the collection is unchanged
    /// - `Persistence` if the backing file cannot be written; the insert is undone
    pub fn add_student(&mut self, record: StudentRecord) -> StoreResult<()> {
        if self.taken.contains(&record.student_id) {
            log_event_with_fields(
                Event::DuplicateIdRejected,
                &[("student_id", record.student_id.as_str())],
            );
            return Err(StoreError::DuplicateId(record.student_id));
        }

        let id = record.student_id.clone();
        self.taken.insert(id.clone());
        self.students.push(record);

        if let Err(e) = self.save() {
            self.students.pop();
            self.taken.remove(&id);
            return Err(e);
        }

        self.ids.observe(&id);
        log_event_with_fields(Event::StudentAdded, &[("student_id", id.as_str())]);
        Ok(())
    }

    /// Every record in collection order.
    pub fn get_all_students(&self) -> &[StudentRecord] {
        &self.students
    }

    fn position(&self, student_id: &str) -> StoreResult<usize> {
        self.students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| {
                log_event_with_fields(Event::StudentNotFound, &[("student_id", student_id)]);
                StoreError::NotFound(student_id.to_string())
            })
    }

    /// Exact lookup by id.
    pub fn get_student(&self, student_id: &str) -> StoreResult<&StudentRecord> {
        self.position(student_id).map(|idx| &self.students[idx])
    }

    /// Overwrites the fields set in `patch` and returns the updated record.
    ///
    /// `student_id` is never changed. On a persistence failure the record
    /// is restored to its previous values.
    pub fn update_student(
        &mut self,
        student_id: &str,
        patch: StudentPatch,
    ) -> StoreResult<&StudentRecord> {
        let idx = self.position(student_id)?;
        let previous = self.students[idx].clone();
        self.students[idx].apply(patch);

        if let Err(e) = self.save() {
            self.students[idx] = previous;
            return Err(e);
        }

        log_event_with_fields(Event::StudentUpdated, &[("student_id", student_id)]);
        Ok(&self.students[idx])
    }

    /// Removes a record and returns it.
    ///
    /// Absent ids are an error, never a silent success.
    pub fn delete_student(&mut self, student_id: &str) -> StoreResult<StudentRecord> {
        let idx = self.position(student_id)?;
        let removed = self.students.remove(idx);
        self.taken.remove(student_id);

        if let Err(e) = self.save() {
            self.taken.insert(removed.student_id.clone());
            self.students.insert(idx, removed);
            return Err(e);
        }

        log_event_with_fields(Event::StudentDeleted, &[("student_id", student_id)]);
        Ok(removed)
    }

    /// Case-insensitive substring search over name and email.
    pub fn search_students(&self, query: &str) -> Vec<&StudentRecord> {
        search(&self.students, query)
    }

    /// Records matching every criterion set in `filter`.
    pub fn filter_students(&self, filter: &StudentFilter) -> Vec<&StudentRecord> {
        filter.apply(&self.students)
    }

    /// Search, then filter the search results.
    pub fn query_students(&self, query: &str, filter: &StudentFilter) -> Vec<&StudentRecord> {
        filter.apply(self.search_students(query))
    }

    /// Summary statistics over the whole collection.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary::from_records(&self.students)
    }
}

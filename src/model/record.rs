//! Student record and the field bundles used to build and patch it

use serde::{Deserialize, Serialize};

use super::performance::Performance;

/// The five editable fields of a student, already normalized.
///
/// Produced by `validation::validate_submission`; nothing else should
/// construct one from raw user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub email: String,
    pub performance: Performance,
}

/// A stored student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Store-assigned identifier, immutable after creation
    pub student_id: String,
    pub name: String,
    pub age: u32,
    /// Always upper-cased, e.g. `10A`
    pub grade: String,
    pub email: String,
    pub performance: Performance,
}

impl StudentRecord {
    /// Builds a record from validated fields and a generated id.
    pub fn new(student_id: impl Into<String>, fields: StudentFields) -> Self {
        Self {
            student_id: student_id.into(),
            name: fields.name,
            age: fields.age,
            grade: fields.grade,
            email: fields.email,
            performance: fields.performance,
        }
    }

    /// Returns the editable fields of this record.
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            age: self.age,
            grade: self.grade.clone(),
            email: self.email.clone(),
            performance: self.performance,
        }
    }

    /// Overwrites every field present in `patch`. `student_id` is never touched.
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(performance) = patch.performance {
            self.performance = performance;
        }
    }
}

/// A set of validated field values to overwrite on an existing record.
///
/// Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Performance>,
}

impl StudentPatch {
    /// Returns true if the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.grade.is_none()
            && self.email.is_none()
            && self.performance.is_none()
    }
}

impl From<StudentFields> for StudentPatch {
    fn from(fields: StudentFields) -> Self {
        Self {
            name: Some(fields.name),
            age: Some(fields.age),
            grade: Some(fields.grade),
            email: Some(fields.email),
            performance: Some(fields.performance),
        }
    }
}

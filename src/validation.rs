//! Input validation for a scheduling run.
//!
//! Checks structural integrity of the student and teacher records before
//! they are loaded into a [`Store`](crate::store::Store). Detects:
//! - Duplicate student IDs
//! - Duplicate teacher IDs
//! - Empty IDs
//!
//! Every problem is collected; validation does not stop at the first one.

use crate::models::{Student, Teacher};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records of the same kind share an ID.
    DuplicateId,
    /// A record has a blank ID.
    EmptyId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates student and teacher records.
///
/// Student and teacher IDs live in separate namespaces; a student and a
/// teacher may share an ID.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(students: &[Student], teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut student_ids = HashSet::new();
    for (pos, s) in students.iter().enumerate() {
        if s.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Student at position {pos} has an empty ID"),
            ));
        } else if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for (pos, t) in teachers.iter().enumerate() {
        if t.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Teacher at position {pos} has an empty ID"),
            ));
        } else if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Scheduling error types.

use thiserror::Error;

use crate::models::{SectionId, Subject};
use crate::validation::ValidationError;

/// Errors that can occur while building a term schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A section roster, student schedule or teacher load is already full.
    #[error("{entity} is at capacity ({limit})")]
    CapacityExceeded { entity: String, limit: usize },

    /// A teacher marked unqualified for a subject was offered a section of it.
    #[error("teacher {teacher} is not qualified to teach {subject}")]
    UnqualifiedAssignment { teacher: String, subject: Subject },

    /// Every time block is taken by a conflicting neighbour.
    #[error("no free time block for {section}: all {palette} blocks used by conflicting sections")]
    Unschedulable { section: SectionId, palette: usize },

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("invalid input: {} problem(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),

    #[error("invalid qualification signal: {0} (expected -1, 0 or 1)")]
    InvalidQualification(i64),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

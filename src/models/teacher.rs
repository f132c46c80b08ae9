//! Teacher model.
//!
//! A teacher holds a qualification signal per subject and a fixed teaching
//! capacity. The assigned schedule never exceeds capacity and never contains
//! a section of a subject the teacher is unqualified for; both rules are
//! enforced by [`Teacher::add_section`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SectionId, Subject, SubjectTable};
use crate::error::{ScheduleError, ScheduleResult};

/// Default number of sections a teacher can take.
pub const DEFAULT_TEACHER_CAPACITY: usize = 6;

/// Arena handle of a teacher inside a [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(pub usize);

/// Ternary qualification signal for one subject.
///
/// Serialized as the integers `-1`, `0`, `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Qualification {
    /// Must never teach the subject.
    #[default]
    Unqualified,
    /// Can teach the subject when no preferred teacher exists.
    Qualified,
    /// First choice for the subject.
    Preferred,
}

impl Qualification {
    pub fn signal(self) -> i64 {
        match self {
            Qualification::Unqualified => -1,
            Qualification::Qualified => 0,
            Qualification::Preferred => 1,
        }
    }
}

impl TryFrom<i64> for Qualification {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Qualification::Unqualified),
            0 => Ok(Qualification::Qualified),
            1 => Ok(Qualification::Preferred),
            other => Err(ScheduleError::InvalidQualification(other)),
        }
    }
}

impl From<Qualification> for i64 {
    fn from(q: Qualification) -> Self {
        q.signal()
    }
}

/// A teacher who can be assigned to sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique external identifier.
    pub id: String,
    pub name: String,
    /// Qualification signal per subject.
    pub qualifications: SubjectTable<Qualification>,
    /// Maximum number of sections.
    pub capacity: usize,
    #[serde(default)]
    pub mentor: bool,
    /// Assigned sections, in assignment order.
    #[serde(default)]
    pub schedule: Vec<SectionId>,
}

impl Teacher {
    /// Creates a teacher unqualified for every subject, with default capacity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            qualifications: SubjectTable::default(),
            capacity: DEFAULT_TEACHER_CAPACITY,
            mentor: false,
            schedule: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_qualification(mut self, subject: Subject, qualification: Qualification) -> Self {
        self.qualifications.set(subject, qualification);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn as_mentor(mut self) -> Self {
        self.mentor = true;
        self
    }

    pub fn qualification(&self, subject: Subject) -> Qualification {
        *self.qualifications.get(subject)
    }

    /// Whether the teacher may teach `subject` at all.
    pub fn is_qualified(&self, subject: Subject) -> bool {
        self.qualification(subject) != Qualification::Unqualified
    }

    /// Number of assigned sections.
    #[inline]
    pub fn load(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_full(&self) -> bool {
        self.load() >= self.capacity
    }

    /// Adds a section of `subject` to the schedule.
    ///
    /// Adding a section already on the schedule is a no-op.
    ///
    /// # Errors
    /// - [`ScheduleError::CapacityExceeded`] if the teacher is full.
    /// - [`ScheduleError::UnqualifiedAssignment`] if the signal for `subject` is -1.
    pub fn add_section(&mut self, section: SectionId, subject: Subject) -> ScheduleResult<()> {
        if self.schedule.contains(&section) {
            return Ok(());
        }
        if self.is_full() {
            return Err(ScheduleError::CapacityExceeded {
                entity: format!("teacher {self}"),
                limit: self.capacity,
            });
        }
        if !self.is_qualified(subject) {
            return Err(ScheduleError::UnqualifiedAssignment {
                teacher: self.to_string(),
                subject,
            });
        }
        self.schedule.push(section);
        Ok(())
    }

    /// Removes a section. Returns whether it was present.
    pub fn remove_section(&mut self, section: SectionId) -> bool {
        match self.schedule.iter().position(|&s| s == section) {
            Some(pos) => {
                self.schedule.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear_schedule(&mut self) {
        self.schedule.clear();
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { &self.id } else { &self.name };
        write!(f, "{name}")?;
        if self.mentor {
            write!(f, " (mentor)")?;
        }
        Ok(())
    }
}

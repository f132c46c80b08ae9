//! Student model.
//!
//! A student carries one ranking score per subject and the ordered list of
//! sections they are enrolled in. Enrollment order is assignment order and
//! a section never appears twice.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Level, SectionId, Subject, SubjectTable};

/// Default cap on sections per student.
pub const MAX_STUDENT_SECTIONS: usize = 6;

/// Arena handle of a student inside a [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub usize);

/// A student to be placed into sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique external identifier.
    pub id: String,
    pub name: String,
    /// Ranking score per subject.
    pub scores: SubjectTable<i32>,
    /// Enrolled sections, in assignment order.
    #[serde(default)]
    pub schedule: Vec<SectionId>,
}

impl Student {
    /// Creates a student with all scores at zero.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            scores: SubjectTable::default(),
            schedule: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ranking score for one subject.
    pub fn with_score(mut self, subject: Subject, score: i32) -> Self {
        self.scores.set(subject, score);
        self
    }

    /// Sets all three scores in one call.
    pub fn with_scores(mut self, english: i32, math: i32, asl: i32) -> Self {
        self.scores = SubjectTable { english, math, asl };
        self
    }

    pub fn score(&self, subject: Subject) -> i32 {
        *self.scores.get(subject)
    }

    /// Placement level for a subject, derived from the score.
    pub fn level(&self, subject: Subject) -> Level {
        Level::from_score(self.score(subject))
    }

    /// Whether the schedule has reached `max_sections`.
    pub fn is_full(&self, max_sections: usize) -> bool {
        self.schedule.len() >= max_sections
    }

    pub fn is_enrolled(&self, section: SectionId) -> bool {
        self.schedule.contains(&section)
    }

    /// Appends a section unless already present. Returns whether it was added.
    pub fn add_section(&mut self, section: SectionId) -> bool {
        if self.is_enrolled(section) {
            return false;
        }
        self.schedule.push(section);
        true
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

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.id)
        } else {
            f.write_str(&self.name)
        }
    }
}

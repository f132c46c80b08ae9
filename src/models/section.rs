//! Section model.
//!
//! A section is one class of a subject at a level: a bounded roster of
//! students, an optional teacher, and, once colored, a time block.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Level, StudentId, Subject, TeacherId, TimeBlock};
use crate::error::{ScheduleError, ScheduleResult};

/// Default roster limit.
pub const CLASS_LIMIT: usize = 7;

/// Arena handle of a section inside a [`Store`](crate::store::Store).
///
/// Handles are assigned in creation order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub usize);

impl SectionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section-{}", self.0)
    }
}

/// A class of one subject at one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub subject: Subject,
    pub level: Level,
    /// Roster limit.
    pub capacity: usize,
    /// Meeting time; `None` until colored.
    pub time: Option<TimeBlock>,
    pub teacher: Option<TeacherId>,
    /// Roster, in enrollment order.
    pub students: Vec<StudentId>,
}

impl Section {
    pub fn new(id: SectionId, subject: Subject, level: Level, capacity: usize) -> Self {
        Self {
            id,
            subject,
            level,
            capacity,
            time: None,
            teacher: None,
            students: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    pub fn size(&self) -> usize {
        self.students.len()
    }

    pub fn has_student(&self, student: StudentId) -> bool {
        self.students.contains(&student)
    }

    /// Adds a student to the roster. Re-adding an enrolled student is a no-op.
    ///
    /// # Errors
    /// [`ScheduleError::CapacityExceeded`] if the roster is full.
    pub fn add_student(&mut self, student: StudentId) -> ScheduleResult<()> {
        if self.has_student(student) {
            return Ok(());
        }
        if self.is_full() {
            return Err(ScheduleError::CapacityExceeded {
                entity: self.id.to_string(),
                limit: self.capacity,
            });
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes a student. Returns whether they were on the roster.
    pub fn remove_student(&mut self, student: StudentId) -> bool {
        match self.students.iter().position(|&s| s == student) {
            Some(pos) => {
                self.students.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn set_teacher(&mut self, teacher: TeacherId) {
        self.teacher = Some(teacher);
    }

    pub fn set_time(&mut self, time: TimeBlock) {
        self.time = Some(time);
    }

    /// Index of the assigned block in [`TIME_BLOCKS`](super::TIME_BLOCKS).
    pub fn time_index(&self) -> Option<usize> {
        self.time.and_then(|t| t.palette_index())
    }

    /// Display label, e.g. "Advanced Math".
    pub fn label(&self) -> String {
        format!("{} {}", self.level, self.subject.title())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.label())?;
        if let Some(time) = self.time {
            write!(f, " at {time}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TIME_BLOCKS;

    fn section() -> Section {
        Section::new(SectionId(0), Subject::Math, Level::Advanced, 2)
    }

    #[test]
    fn test_roster_limit() {
        let mut s = section();
        s.add_student(StudentId(0)).unwrap();
        s.add_student(StudentId(1)).unwrap();
        assert!(s.is_full());

        let err = s.add_student(StudentId(2)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CapacityExceeded {
                entity: "section-0".into(),
                limit: 2,
            }
        );
        assert_eq!(s.size(), 2);
    }

    #[test]
    fn test_add_student_idempotent() {
        let mut s = section();
        s.add_student(StudentId(4)).unwrap();
        s.add_student(StudentId(4)).unwrap();
        assert_eq!(s.students, vec![StudentId(4)]);
        assert!(s.remove_student(StudentId(4)));
        assert!(!s.remove_student(StudentId(4)));
    }

    #[test]
    fn test_time_index() {
        let mut s = section();
        assert_eq!(s.time_index(), None);
        s.set_time(TIME_BLOCKS[2]);
        assert_eq!(s.time_index(), Some(2));
    }

    #[test]
    fn test_display() {
        let mut s = section();
        assert_eq!(s.to_string(), "section-0 (Advanced Math)");
        s.set_time(TIME_BLOCKS[0]);
        assert_eq!(s.to_string(), "section-0 (Advanced Math) at 08:00-09:00");
    }
}

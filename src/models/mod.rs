//! Scheduling domain models.
//!
//! Passive data holders with small invariant-preserving mutators. Entities
//! reference each other through arena handles (`StudentId`, `TeacherId`,
//! `SectionId`) owned by a [`Store`](crate::store::Store), never through
//! shared pointers.
//!
//! | Model | Role |
//! |-------|------|
//! | Student | Ranked per subject, enrolled in sections |
//! | Teacher | Qualified per subject, bounded teaching load |
//! | Section | Subject × level class with a bounded roster |
//! | TimeBlock | One of six fixed meeting intervals |

mod section;
mod student;
mod subject;
mod teacher;
mod time_block;

pub use section::{Section, SectionId, CLASS_LIMIT};
pub use student::{Student, StudentId, MAX_STUDENT_SECTIONS};
pub use subject::{Level, Subject, SubjectTable};
pub use teacher::{Qualification, Teacher, TeacherId, DEFAULT_TEACHER_CAPACITY};
pub use time_block::{TimeBlock, LUNCH_BREAK, TIME_BLOCKS};

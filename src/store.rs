//! Explicit registry of students, teachers and sections.
//!
//! The store owns every entity of one scheduling run in arena vectors and
//! hands out index handles. Cross-links (roster ↔ schedule, section ↔
//! teacher) are only made through store methods so both sides stay in sync.
//!
//! # Lifecycle
//! 1. Load records with [`Store::from_records`] or `add_student`/`add_teacher`.
//! 2. Run a [`Scheduler`](crate::scheduler::Scheduler); it calls
//!    [`Store::reset_schedule`] first, so re-runs are idempotent.
//! 3. Read results through the accessors or [`report`](crate::report).
//!
//! The store is not internally synchronized. Hosts that read results while
//! another run may start must serialize access themselves.

use std::collections::HashMap;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{
    Level, Section, SectionId, Student, StudentId, Subject, Teacher, TeacherId, TimeBlock,
};
use crate::validation::validate_input;

#[derive(Debug, Clone, Default)]
pub struct Store {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    sections: Vec<Section>,
    student_index: HashMap<String, StudentId>,
    teacher_index: HashMap<String, TeacherId>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from validated records, preserving their order.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] with every validation problem found.
    pub fn from_records(students: Vec<Student>, teachers: Vec<Teacher>) -> ScheduleResult<Self> {
        validate_input(&students, &teachers).map_err(ScheduleError::InvalidInput)?;

        let mut store = Self::new();
        for student in students {
            store.add_student(student)?;
        }
        for teacher in teachers {
            store.add_teacher(teacher)?;
        }
        Ok(store)
    }

    /// Registers a student. Any schedule it carries is discarded.
    pub fn add_student(&mut self, mut student: Student) -> ScheduleResult<StudentId> {
        if self.student_index.contains_key(&student.id) {
            return Err(ScheduleError::DuplicateId(student.id));
        }
        student.clear_schedule();
        let id = StudentId(self.students.len());
        self.student_index.insert(student.id.clone(), id);
        self.students.push(student);
        Ok(id)
    }

    /// Registers a teacher. Any schedule it carries is discarded.
    pub fn add_teacher(&mut self, mut teacher: Teacher) -> ScheduleResult<TeacherId> {
        if self.teacher_index.contains_key(&teacher.id) {
            return Err(ScheduleError::DuplicateId(teacher.id));
        }
        teacher.clear_schedule();
        let id = TeacherId(self.teachers.len());
        self.teacher_index.insert(teacher.id.clone(), id);
        self.teachers.push(teacher);
        Ok(id)
    }

    /// Drops all sections and clears every student and teacher schedule.
    pub fn reset_schedule(&mut self) {
        self.sections.clear();
        for s in &mut self.students {
            s.clear_schedule();
        }
        for t in &mut self.teachers {
            t.clear_schedule();
        }
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.students.clear();
        self.teachers.clear();
        self.sections.clear();
        self.student_index.clear();
        self.teacher_index.clear();
    }

    /// Creates an empty section and returns its handle.
    pub fn create_section(&mut self, subject: Subject, level: Level, capacity: usize) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(Section::new(id, subject, level, capacity));
        id
    }

    /// Puts `student` on the roster of `section` and the section on the
    /// student's schedule. Re-enrolling is a no-op.
    ///
    /// # Errors
    /// [`ScheduleError::CapacityExceeded`] if the roster is full or the
    /// student already holds `max_student_sections` sections. Nothing is
    /// changed on error.
    pub fn enroll(
        &mut self,
        section: SectionId,
        student: StudentId,
        max_student_sections: usize,
    ) -> ScheduleResult<()> {
        let s = &self.students[student.0];
        if s.is_enrolled(section) {
            return Ok(());
        }
        if s.is_full(max_student_sections) {
            return Err(ScheduleError::CapacityExceeded {
                entity: format!("student {s}"),
                limit: max_student_sections,
            });
        }
        self.sections[section.0].add_student(student)?;
        self.students[student.0].add_section(section);
        Ok(())
    }

    /// Binds `teacher` to `section` on both sides.
    ///
    /// # Errors
    /// Whatever [`Teacher::add_section`] rejects; the section is left untouched.
    pub fn assign_teacher(&mut self, section: SectionId, teacher: TeacherId) -> ScheduleResult<()> {
        let subject = self.sections[section.0].subject;
        self.teachers[teacher.0].add_section(section, subject)?;
        self.sections[section.0].set_teacher(teacher);
        Ok(())
    }

    pub fn set_time(&mut self, section: SectionId, time: TimeBlock) {
        self.sections[section.0].set_time(time);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// # Panics
    /// If the handle was not issued by this store.
    pub fn student(&self, id: StudentId) -> &Student {
        &self.students[id.0]
    }

    /// # Panics
    /// If the handle was not issued by this store.
    pub fn teacher(&self, id: TeacherId) -> &Teacher {
        &self.teachers[id.0]
    }

    /// # Panics
    /// If the handle was not issued by this store, or was dropped by a reset.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.0]
    }

    pub fn student_ids(&self) -> impl Iterator<Item = StudentId> {
        (0..self.students.len()).map(StudentId)
    }

    pub fn teacher_ids(&self) -> impl Iterator<Item = TeacherId> {
        (0..self.teachers.len()).map(TeacherId)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> {
        (0..self.sections.len()).map(SectionId)
    }

    /// Looks up a student by external ID.
    pub fn find_student(&self, id: &str) -> Option<StudentId> {
        self.student_index.get(id).copied()
    }

    /// Looks up a teacher by external ID.
    pub fn find_teacher(&self, id: &str) -> Option<TeacherId> {
        self.teacher_index.get(id).copied()
    }
}

//! Serializable views of a finished run.
//!
//! Handles are resolved to external IDs so the host can serialize the
//! views as-is. Field names are camelCase.

use serde::Serialize;

use crate::models::{Qualification, Section, SectionId, Student, Subject, SubjectTable, Teacher, TimeBlock, TIME_BLOCKS};
use crate::scheduler::{bucket_students, Bucket, ScheduleOutcome};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub id: SectionId,
    pub subject: Subject,
    pub level: u8,
    /// Palette index of the time block.
    pub time: Option<usize>,
    pub teacher_id: Option<String>,
    pub student_ids: Vec<String>,
}

impl SectionView {
    pub fn new(store: &Store, section: &Section) -> Self {
        Self {
            id: section.id,
            subject: section.subject,
            level: section.level.index(),
            time: section.time_index(),
            teacher_id: section.teacher.map(|t| store.teacher(t).id.clone()),
            student_ids: section
                .students
                .iter()
                .map(|&s| store.student(s).id.clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: String,
    pub name: String,
    pub subject_rankings: SubjectTable<i32>,
    pub section_ids: Vec<SectionId>,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            subject_rankings: student.scores,
            section_ids: student.schedule.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherView {
    pub id: String,
    pub name: String,
    pub subjects: SubjectTable<Qualification>,
    pub section_ids: Vec<SectionId>,
    pub is_mentor: bool,
}

impl From<&Teacher> for TeacherView {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id.clone(),
            name: teacher.name.clone(),
            subjects: teacher.qualifications,
            section_ids: teacher.schedule.clone(),
            is_mentor: teacher.mentor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketView {
    pub name: String,
    pub subject: Subject,
    pub level: u8,
    pub size: usize,
    pub sections_needed: usize,
    pub student_ids: Vec<String>,
}

impl BucketView {
    pub fn new(store: &Store, bucket: &Bucket, class_limit: usize) -> Self {
        Self {
            name: bucket.name(),
            subject: bucket.subject,
            level: bucket.level.index(),
            size: bucket.size(),
            sections_needed: bucket.sections_needed(class_limit),
            student_ids: bucket
                .students
                .iter()
                .map(|&s| store.student(s).id.clone())
                .collect(),
        }
    }

    /// Buckets for the store's current students, without running the pipeline.
    pub fn collect(store: &Store, class_limit: usize) -> Vec<Self> {
        bucket_students(store)
            .iter()
            .map(|b| Self::new(store, b, class_limit))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBlockView {
    /// Palette index.
    pub id: usize,
    pub start: u16,
    pub end: u16,
}

impl TimeBlockView {
    pub fn palette() -> Vec<Self> {
        TIME_BLOCKS
            .iter()
            .enumerate()
            .map(|(id, &TimeBlock { start, end })| Self { id, start, end })
            .collect()
    }
}

/// Everything the host needs to publish a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub sections: Vec<SectionView>,
    pub students: Vec<StudentView>,
    pub teachers: Vec<TeacherView>,
    pub time_blocks: Vec<TimeBlockView>,
    pub conflicts: Vec<String>,
}

impl ScheduleReport {
    pub fn new(store: &Store, outcome: &ScheduleOutcome) -> Self {
        Self {
            sections: store
                .sections()
                .iter()
                .map(|s| SectionView::new(store, s))
                .collect(),
            students: store.students().iter().map(StudentView::from).collect(),
            teachers: store.teachers().iter().map(TeacherView::from).collect(),
            time_blocks: TimeBlockView::palette(),
            conflicts: outcome.conflict_messages(),
        }
    }
}

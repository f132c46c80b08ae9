//! Level bucketing.
//!
//! Groups students by (subject, level). Every student lands in exactly one
//! bucket per subject, so a cohort of `n` students fills
//! `n * Subject::ALL.len()` bucket slots in total.

use crate::models::{Level, StudentId, Subject};
use crate::store::Store;

/// Students sharing a subject and level for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub subject: Subject,
    pub level: Level,
    /// Members, in store order.
    pub students: Vec<StudentId>,
}

impl Bucket {
    pub fn new(subject: Subject, level: Level) -> Self {
        Self {
            subject,
            level,
            students: Vec::new(),
        }
    }

    /// Adds a student unless already present.
    pub fn add_student(&mut self, student: StudentId) {
        if !self.students.contains(&student) {
            self.students.push(student);
        }
    }

    pub fn size(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// `ceil(size / class_limit)`; zero for an empty bucket.
    pub fn sections_needed(&self, class_limit: usize) -> usize {
        sections_needed(self.size(), class_limit)
    }

    /// Display name, e.g. "Intermediate English".
    pub fn name(&self) -> String {
        format!("{} {}", self.level, self.subject.title())
    }
}

/// `ceil(size / class_limit)`.
///
/// # Panics
/// If `class_limit` is zero.
pub fn sections_needed(size: usize, class_limit: usize) -> usize {
    size.div_ceil(class_limit)
}

/// One empty bucket per (subject, level), subject-major.
pub fn create_buckets() -> Vec<Bucket> {
    Subject::ALL
        .into_iter()
        .flat_map(|subject| Level::ALL.into_iter().map(move |level| Bucket::new(subject, level)))
        .collect()
}

/// Places every student of the store into its bucket for each subject.
///
/// Bucket order follows [`create_buckets`]; membership order follows the
/// store's student order.
pub fn bucket_students(store: &Store) -> Vec<Bucket> {
    let mut buckets = create_buckets();
    for (id, student) in store.student_ids().zip(store.students()) {
        for subject in Subject::ALL {
            let level = student.level(subject);
            if let Some(bucket) = buckets
                .iter_mut()
                .find(|b| b.subject == subject && b.level == level)
            {
                bucket.add_student(id);
            }
        }
    }
    buckets
}

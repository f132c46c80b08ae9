//! Post-run schedule audit.
//!
//! Re-scans every student and teacher schedule for two sections at the same
//! time block. A correct coloring never produces one; the audit exists to
//! catch coloring bugs and never mutates the store.

use std::collections::HashMap;
use std::fmt;

use crate::models::{SectionId, TimeBlock};
use crate::store::Store;

/// Who owns the colliding schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictOwner {
    Student,
    Teacher,
}

/// Two sections on one person's schedule at the same time block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub owner: ConflictOwner,
    /// External ID of the student or teacher.
    pub person_id: String,
    /// Display name of the student or teacher.
    pub person: String,
    /// The section first seen at `time`.
    pub first: SectionId,
    /// The later section repeating `time`.
    pub second: SectionId,
    pub time: TimeBlock,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = match self.owner {
            ConflictOwner::Student => "Student",
            ConflictOwner::Teacher => "Teacher",
        };
        write!(
            f,
            "{owner} conflict: {} has {} and {} at {}",
            self.person, self.first, self.second, self.time
        )
    }
}

/// Finds every time collision, students first, then teachers.
///
/// Sections without a time block are skipped.
pub fn find_conflicts(store: &Store) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for student in store.students() {
        scan(
            store,
            &student.schedule,
            ConflictOwner::Student,
            &student.id,
            &student.to_string(),
            &mut conflicts,
        );
    }
    for teacher in store.teachers() {
        scan(
            store,
            &teacher.schedule,
            ConflictOwner::Teacher,
            &teacher.id,
            &teacher.to_string(),
            &mut conflicts,
        );
    }

    conflicts
}

/// Human-readable conflict descriptions.
pub fn check_for_conflicts(store: &Store) -> Vec<String> {
    find_conflicts(store).iter().map(ToString::to_string).collect()
}

fn scan(
    store: &Store,
    schedule: &[SectionId],
    owner: ConflictOwner,
    person_id: &str,
    person: &str,
    out: &mut Vec<Conflict>,
) {
    let mut seen: HashMap<TimeBlock, SectionId> = HashMap::new();
    for &section in schedule {
        let Some(time) = store.section(section).time else {
            continue;
        };
        match seen.get(&time) {
            Some(&first) => out.push(Conflict {
                owner,
                person_id: person_id.to_string(),
                person: person.to_string(),
                first,
                second: section,
                time,
            }),
            None => {
                seen.insert(time, section);
            }
        }
    }
}

//! Teacher assignment.
//!
//! # Algorithm
//! For each section, in creation order:
//! 1. Partition the teachers by their signal for the section's subject:
//!    preferred (1) and fallback (0). Unqualified teachers (-1) are in
//!    neither pool.
//! 2. Use the preferred pool if it is non-empty, otherwise the fallback pool.
//! 3. Stable-sort the pool by current load, so equal loads keep store order.
//! 4. Offer the section to each candidate in turn; the first one that
//!    accepts is bound to it. A refusal (full, unqualified) moves on to the
//!    next candidate.
//!
//! Sections nobody accepts stay without a teacher. That is not an error:
//! the handles are returned so the caller can report them.
//!
//! # Complexity
//! O(s * t log t) for s sections and t teachers.

use tracing::{debug, warn};

use crate::models::{Qualification, SectionId, Subject, TeacherId};
use crate::store::Store;

/// Candidate teachers for `subject`, least loaded first.
pub fn candidate_pool(store: &Store, subject: Subject) -> Vec<TeacherId> {
    let (preferred, fallback): (Vec<TeacherId>, Vec<TeacherId>) = store
        .teacher_ids()
        .filter(|&t| store.teacher(t).is_qualified(subject))
        .partition(|&t| store.teacher(t).qualification(subject) == Qualification::Preferred);

    let mut pool = if preferred.is_empty() {
        fallback
    } else {
        preferred
    };
    pool.sort_by_key(|&t| store.teacher(t).load());
    pool
}

/// Assigns a teacher to every section of the store it can.
///
/// Returns the sections left without a teacher, in creation order.
pub fn assign_teachers(store: &mut Store) -> Vec<SectionId> {
    let sections: Vec<SectionId> = store.section_ids().collect();
    sections
        .into_iter()
        .filter(|&section| !assign_section(store, section))
        .collect()
}

/// Walks the candidate pool for one section. Returns whether a teacher was bound.
fn assign_section(store: &mut Store, section: SectionId) -> bool {
    let subject = store.section(section).subject;
    let pool = candidate_pool(store, subject);

    for candidate in pool {
        match store.assign_teacher(section, candidate) {
            Ok(()) => {
                debug!(
                    %section,
                    teacher = %store.teacher(candidate),
                    load = store.teacher(candidate).load(),
                    "assigned teacher"
                );
                return true;
            }
            Err(reason) => {
                debug!(%section, teacher = %store.teacher(candidate), %reason, "candidate refused");
            }
        }
    }

    warn!(%section, subject = %subject, "no teacher available for section");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Teacher};

    fn teacher(id: &str, subject: Subject, q: Qualification, capacity: usize) -> Teacher {
        Teacher::new(id)
            .with_qualification(subject, q)
            .with_capacity(capacity)
    }

    fn store_with(teachers: Vec<Teacher>) -> Store {
        Store::from_records(vec![], teachers).unwrap()
    }

    #[test]
    fn test_preferred_pool_wins() {
        let mut store = store_with(vec![
            teacher("fallback", Subject::Math, Qualification::Qualified, 6),
            teacher("preferred", Subject::Math, Qualification::Preferred, 6),
        ]);
        let sec = store.create_section(Subject::Math, Level::Beginner, 7);

        assert!(assign_teachers(&mut store).is_empty());
        assert_eq!(store.section(sec).teacher, store.find_teacher("preferred"));
    }

    #[test]
    fn test_fallback_when_no_preferred() {
        let mut store = store_with(vec![
            teacher("no", Subject::English, Qualification::Unqualified, 6),
            teacher("ok", Subject::English, Qualification::Qualified, 6),
        ]);
        let sec = store.create_section(Subject::English, Level::Advanced, 7);

        assign_teachers(&mut store);
        assert_eq!(store.section(sec).teacher, store.find_teacher("ok"));
    }

    #[test]
    fn test_least_loaded_first_with_stable_ties() {
        let mut store = store_with(vec![
            teacher("a", Subject::Math, Qualification::Preferred, 6),
            teacher("b", Subject::Math, Qualification::Preferred, 6),
        ]);
        let s0 = store.create_section(Subject::Math, Level::Beginner, 7);
        let s1 = store.create_section(Subject::Math, Level::Intermediate, 7);
        let s2 = store.create_section(Subject::Math, Level::Advanced, 7);

        assign_teachers(&mut store);
        let a = store.find_teacher("a");
        let b = store.find_teacher("b");
        assert_eq!(store.section(s0).teacher, a);
        assert_eq!(store.section(s1).teacher, b);
        assert_eq!(store.section(s2).teacher, a);
    }

    #[test]
    fn test_full_teacher_is_skipped() {
        let mut store = store_with(vec![
            teacher("tiny", Subject::Math, Qualification::Preferred, 0),
            teacher("big", Subject::Math, Qualification::Preferred, 3),
        ]);
        let sec = store.create_section(Subject::Math, Level::Beginner, 7);

        assert!(assign_teachers(&mut store).is_empty());
        assert_eq!(store.section(sec).teacher, store.find_teacher("big"));
    }

    #[test]
    fn test_preferred_pool_exhausted_leaves_section_unstaffed() {
        // The fallback pool is only consulted when no preferred teacher exists,
        // not when every preferred teacher is full.
        let mut store = store_with(vec![
            teacher("pref", Subject::Asl, Qualification::Preferred, 1),
            teacher("fallback", Subject::Asl, Qualification::Qualified, 6),
        ]);
        let s0 = store.create_section(Subject::Asl, Level::Beginner, 7);
        let s1 = store.create_section(Subject::Asl, Level::Advanced, 7);

        let unstaffed = assign_teachers(&mut store);
        assert_eq!(unstaffed, vec![s1]);
        assert_eq!(store.section(s0).teacher, store.find_teacher("pref"));
        assert_eq!(store.section(s1).teacher, None);
    }

    #[test]
    fn test_unqualified_teacher_never_assigned() {
        let mut store = store_with(vec![teacher("t", Subject::Asl, Qualification::Unqualified, 99)]);
        for level in Level::ALL {
            store.create_section(Subject::Asl, level, 7);
        }

        let unstaffed = assign_teachers(&mut store);
        assert_eq!(unstaffed.len(), 3);
        assert!(store.sections().iter().all(|s| s.teacher.is_none()));
        assert_eq!(store.teachers()[0].load(), 0);
    }

    #[test]
    fn test_candidate_pool_order() {
        let mut store = store_with(vec![
            teacher("x", Subject::Math, Qualification::Qualified, 6),
            teacher("y", Subject::Math, Qualification::Qualified, 6),
            teacher("z", Subject::Math, Qualification::Unqualified, 6),
        ]);
        let sec = store.create_section(Subject::Math, Level::Beginner, 7);
        store.assign_teacher(sec, TeacherId(0)).unwrap();

        assert_eq!(
            candidate_pool(&store, Subject::Math),
            vec![TeacherId(1), TeacherId(0)]
        );
        assert!(candidate_pool(&store, Subject::English).is_empty());
    }
}

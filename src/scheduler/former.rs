//! Section forming.
//!
//! Splits a bucket into `ceil(n / class_limit)` contiguous groups in member
//! order and creates one section per group.
//!
//! # Group sizes
//! Every group but the last gets `n / k` students and the last group takes
//! the remainder, so it may be larger than the others. When that last group
//! would exceed the class limit (20 students over 3 sections would give
//! 6, 6, 8), the remainder is instead spread one student at a time over the
//! trailing groups (6, 7, 7). Rosters therefore never exceed the limit and
//! no student is dropped.

use tracing::{debug, warn};

use super::bucket::{sections_needed, Bucket};
use crate::error::ScheduleResult;
use crate::models::SectionId;
use crate::store::Store;

/// Group sizes for a bucket of `size` students.
///
/// The sizes sum to `size` and none exceeds `class_limit`.
///
/// # Panics
/// If `class_limit` is zero.
pub fn group_sizes(size: usize, class_limit: usize) -> Vec<usize> {
    split(size, class_limit).0
}

/// Group sizes plus whether the remainder had to be spread.
fn split(size: usize, class_limit: usize) -> (Vec<usize>, bool) {
    let k = sections_needed(size, class_limit);
    if k == 0 {
        return (Vec::new(), false);
    }

    let base = size / k;
    let last = size - base * (k - 1);
    if last <= class_limit {
        let mut sizes = vec![base; k - 1];
        sizes.push(last);
        return (sizes, false);
    }

    let remainder = size % k;
    let sizes = (0..k)
        .map(|i| if i >= k - remainder { base + 1 } else { base })
        .collect();
    (sizes, true)
}

/// Creates the sections for one bucket and enrolls its members.
///
/// Returns the new section handles in creation order.
///
/// # Errors
/// [`ScheduleError::CapacityExceeded`](crate::error::ScheduleError::CapacityExceeded)
/// if a member already holds `max_student_sections` sections.
pub fn form_sections(
    store: &mut Store,
    bucket: &Bucket,
    class_limit: usize,
    max_student_sections: usize,
) -> ScheduleResult<Vec<SectionId>> {
    let (sizes, spread) = split(bucket.size(), class_limit);
    if spread {
        warn!(
            bucket = %bucket.name(),
            size = bucket.size(),
            class_limit,
            "remainder spread over trailing sections to respect the class limit"
        );
    }

    let mut created = Vec::with_capacity(sizes.len());
    let mut members = bucket.students.iter().copied();
    for group in sizes {
        let section = store.create_section(bucket.subject, bucket.level, class_limit);
        for student in members.by_ref().take(group) {
            store.enroll(section, student, max_student_sections)?;
        }
        debug!(%section, bucket = %bucket.name(), students = group, "formed section");
        created.push(section);
    }
    Ok(created)
}

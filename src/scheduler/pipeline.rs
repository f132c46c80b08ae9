//! The scheduling run.
//!
//! # Algorithm
//!
//! 1. Reset the store schedule (sections dropped, schedules cleared).
//! 2. Bucket students by (subject, level).
//! 3. Form capacity-bounded sections per bucket and enroll members.
//! 4. Assign the least-loaded qualified teacher to each section.
//! 5. Build the conflict graph from shared students and teachers.
//! 6. Color the graph with [`TIME_BLOCKS`].
//! 7. Audit every schedule for residual time collisions.
//!
//! Steps run strictly in sequence. A run is all-or-nothing: on error the
//! store schedule is reset again, so no partial timetable is left behind.
//! Identical, identically ordered inputs always produce identical results.

use tracing::{info, warn};

use super::assigner::assign_teachers;
use super::audit::{find_conflicts, Conflict};
use super::bucket::{bucket_students, Bucket};
use super::coloring::assign_time_blocks;
use super::former::form_sections;
use super::graph::ConflictGraph;
use super::kpi::ScheduleKpi;
use crate::config::SchedulerConfig;
use crate::error::ScheduleResult;
use crate::models::{SectionId, TIME_BLOCKS};
use crate::store::Store;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Buckets as formed this run.
    pub buckets: Vec<Bucket>,
    /// Sections no teacher could take.
    pub unstaffed: Vec<SectionId>,
    /// Residual collisions found by the audit. Empty for a correct coloring.
    pub conflicts: Vec<Conflict>,
    pub kpi: ScheduleKpi,
}

impl ScheduleOutcome {
    /// Human-readable conflict descriptions.
    pub fn conflict_messages(&self) -> Vec<String> {
        self.conflicts.iter().map(ToString::to_string).collect()
    }

    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Sequences the pipeline stages over a [`Store`].
///
/// # Example
///
/// ```
/// use cohort_schedule::models::{Qualification, Student, Subject, Teacher};
/// use cohort_schedule::scheduler::Scheduler;
/// use cohort_schedule::store::Store;
///
/// let students = (0..8)
///     .map(|i| Student::new(format!("s{i}")).with_scores(5, 8, 2))
///     .collect();
/// let teachers = vec![Teacher::new("t1")
///     .with_qualification(Subject::English, Qualification::Preferred)
///     .with_qualification(Subject::Math, Qualification::Preferred)
///     .with_qualification(Subject::Asl, Qualification::Qualified)];
/// let mut store = Store::from_records(students, teachers).unwrap();
///
/// let outcome = Scheduler::new().run(&mut store).unwrap();
/// assert_eq!(store.sections().len(), 6);
/// assert!(outcome.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the full pipeline over `store`.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidConfig`](crate::error::ScheduleError::InvalidConfig)
    ///   before anything is touched.
    /// - [`ScheduleError::CapacityExceeded`](crate::error::ScheduleError::CapacityExceeded)
    ///   if a student would exceed `max_student_sections`.
    /// - [`ScheduleError::Unschedulable`](crate::error::ScheduleError::Unschedulable)
    ///   if some section has no free time block.
    pub fn run(&self, store: &mut Store) -> ScheduleResult<ScheduleOutcome> {
        self.config.validate()?;
        store.reset_schedule();

        let result = self.run_stages(store);
        if let Err(ref e) = result {
            warn!(error = %e, "scheduling run aborted");
            store.reset_schedule();
        }
        result
    }

    fn run_stages(&self, store: &mut Store) -> ScheduleResult<ScheduleOutcome> {
        let buckets = bucket_students(store);
        for bucket in &buckets {
            form_sections(
                store,
                bucket,
                self.config.class_limit,
                self.config.max_student_sections,
            )?;
        }

        let unstaffed = assign_teachers(store);

        let graph = ConflictGraph::build(store);
        assign_time_blocks(store, &graph, &TIME_BLOCKS)?;

        let conflicts = find_conflicts(store);
        for conflict in &conflicts {
            warn!(%conflict, "schedule conflict");
        }

        let kpi = ScheduleKpi::calculate(store);
        info!(
            students = store.students().len(),
            teachers = store.teachers().len(),
            sections = kpi.section_count,
            unstaffed = kpi.unstaffed_sections,
            edges = graph.edge_count(),
            blocks_used = kpi.blocks_used,
            conflicts = conflicts.len(),
            "scheduling run completed"
        );

        Ok(ScheduleOutcome {
            buckets,
            unstaffed,
            conflicts,
            kpi,
        })
    }
}

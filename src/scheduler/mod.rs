//! The scheduling pipeline and KPI evaluation.
//!
//! Stages, in run order:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Level bucketing | `bucket` | (subject, level) buckets |
//! | Section forming | `former` | Sections with rosters |
//! | Teacher assignment | `assigner` | Sections with teachers |
//! | Conflict graph | `graph` | Adjacency over sections |
//! | Time blocking | `coloring` | Sections with time blocks |
//! | Audit | `audit` | Residual conflicts |
//!
//! [`Scheduler`] sequences them; each stage is also usable on its own.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - de Werra (1985), "An introduction to timetabling"

pub mod assigner;
pub mod audit;
pub mod bucket;
pub mod coloring;
pub mod former;
pub mod graph;
mod kpi;
mod pipeline;

pub use audit::{check_for_conflicts, find_conflicts, Conflict, ConflictOwner};
pub use bucket::{bucket_students, create_buckets, Bucket};
pub use graph::ConflictGraph;
pub use kpi::ScheduleKpi;
pub use pipeline::{ScheduleOutcome, Scheduler};

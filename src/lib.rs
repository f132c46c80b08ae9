//! Term scheduling for a cohort of students and teachers.
//!
//! Places students into leveled course sections, staffs every section with
//! a qualified teacher, and gives each section a conflict-free meeting time
//! from a fixed palette of six time blocks.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `Teacher`, `Section`,
//!   `TimeBlock`, `Subject`, `Level`, `Qualification`
//! - **`store`**: Arena registry owning all entities of a run
//! - **`scheduler`**: Pipeline stages and the `Scheduler` that runs them
//! - **`validation`**: Input integrity checks (duplicate or empty IDs)
//! - **`report`**: Serializable views for the hosting service
//! - **`config`**: Class limit and student schedule cap
//!
//! # Architecture
//!
//! The crate owns no I/O surface. Loading records and transporting results
//! (CSV, JSON over HTTP) belong to the host, which hands a [`store::Store`]
//! to a [`scheduler::Scheduler`] and reads the results back.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - de Werra (1985), "An introduction to timetabling"

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use error::{ScheduleError, ScheduleResult};

//! Schedule quality metrics (KPIs).
//!
//! Summarizes a finished run for reporting and logging.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Sections | Sections created this run |
//! | Unstaffed | Sections without a teacher |
//! | Blocks used | Distinct time blocks in use |
//! | Avg / max roster | Students per section |
//! | Teacher load | Sections per teacher |
//! | Avg utilization | Mean of load / capacity over teachers with capacity |

use std::collections::{BTreeMap, HashMap};

use crate::store::Store;

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    pub section_count: usize,
    pub staffed_sections: usize,
    pub unstaffed_sections: usize,
    /// Number of distinct time blocks holding at least one section.
    pub blocks_used: usize,
    /// Sections per palette index.
    pub sections_per_block: BTreeMap<usize, usize>,
    pub avg_roster_size: f64,
    pub max_roster_size: usize,
    /// Assigned sections per teacher ID.
    pub load_by_teacher: HashMap<String, usize>,
    /// Mean teacher utilization (0.0..1.0).
    pub avg_teacher_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from the current state of a store.
    pub fn calculate(store: &Store) -> Self {
        let sections = store.sections();
        let section_count = sections.len();
        let staffed_sections = sections.iter().filter(|s| s.teacher.is_some()).count();

        let mut sections_per_block = BTreeMap::new();
        for index in sections.iter().filter_map(|s| s.time_index()) {
            *sections_per_block.entry(index).or_insert(0) += 1;
        }

        let total_students: usize = sections.iter().map(|s| s.size()).sum();
        let avg_roster_size = if section_count == 0 {
            0.0
        } else {
            total_students as f64 / section_count as f64
        };
        let max_roster_size = sections.iter().map(|s| s.size()).max().unwrap_or(0);

        let load_by_teacher = store
            .teachers()
            .iter()
            .map(|t| (t.id.clone(), t.load()))
            .collect();

        let utilizations: Vec<f64> = store
            .teachers()
            .iter()
            .filter(|t| t.capacity > 0)
            .map(|t| t.load() as f64 / t.capacity as f64)
            .collect();
        let avg_teacher_utilization = if utilizations.is_empty() {
            0.0
        } else {
            utilizations.iter().sum::<f64>() / utilizations.len() as f64
        };

        Self {
            section_count,
            staffed_sections,
            unstaffed_sections: section_count - staffed_sections,
            blocks_used: sections_per_block.len(),
            sections_per_block,
            avg_roster_size,
            max_roster_size,
            load_by_teacher,
            avg_teacher_utilization,
        }
    }

    /// Whether every section has a teacher.
    pub fn is_fully_staffed(&self) -> bool {
        self.unstaffed_sections == 0
    }
}

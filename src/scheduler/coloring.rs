//! Time block assignment by greedy graph coloring.
//!
//! # Algorithm (Welsh-Powell)
//! 1. Order sections by descending degree. The sort is stable, so sections
//!    of equal degree keep creation order.
//! 2. For each section in that order, collect the blocks already held by
//!    its colored neighbours.
//! 3. Give the section the first palette block not in that set.
//!
//! If every palette block is taken by a neighbour the coloring fails with
//! [`ScheduleError::Unschedulable`]. There is no backtracking and the
//! palette never grows.
//!
//! # Complexity
//! O(V log V + E * P) for palette size P.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::cmp::Reverse;

use tracing::debug;

use super::graph::ConflictGraph;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{SectionId, TimeBlock};
use crate::store::Store;

/// Processing order: descending degree, ties in creation order.
pub fn coloring_order(graph: &ConflictGraph) -> Vec<SectionId> {
    let mut order: Vec<SectionId> = (0..graph.len()).map(SectionId).collect();
    order.sort_by_key(|&s| Reverse(graph.degree(s)));
    order
}

/// Colors `graph` with `palette`, returning one block per section index.
///
/// # Errors
/// [`ScheduleError::Unschedulable`] naming the first section with no free block.
pub fn color_graph(graph: &ConflictGraph, palette: &[TimeBlock]) -> ScheduleResult<Vec<TimeBlock>> {
    let mut colors: Vec<Option<usize>> = vec![None; graph.len()];

    for section in coloring_order(graph) {
        let mut used = vec![false; palette.len()];
        for neighbor in graph.neighbors(section) {
            if let Some(c) = colors[neighbor.index()] {
                used[c] = true;
            }
        }

        let free = used
            .iter()
            .position(|&taken| !taken)
            .ok_or(ScheduleError::Unschedulable {
                section,
                palette: palette.len(),
            })?;
        colors[section.index()] = Some(free);
    }

    Ok(colors
        .into_iter()
        .flatten()
        .map(|c| palette[c])
        .collect())
}

/// Colors the store's sections and writes the blocks back.
///
/// The store is only touched when every section could be colored.
pub fn assign_time_blocks(
    store: &mut Store,
    graph: &ConflictGraph,
    palette: &[TimeBlock],
) -> ScheduleResult<()> {
    let blocks = color_graph(graph, palette)?;
    for (index, block) in blocks.into_iter().enumerate() {
        let section = SectionId(index);
        debug!(%section, time = %block, degree = graph.degree(section), "assigned time block");
        store.set_time(section, block);
    }
    Ok(())
}

//! Conflict graph over sections.
//!
//! Two sections conflict (must not share a time block) when some student or
//! some teacher has both on their schedule. The graph is undirected and
//! unweighted: a pair linked by a shared student and a shared teacher is
//! still a single edge.

use std::collections::BTreeSet;

use crate::models::SectionId;
use crate::store::Store;

/// Adjacency list indexed by [`SectionId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<SectionId>>,
}

impl ConflictGraph {
    /// A graph of `nodes` sections with no conflicts.
    pub fn empty(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    /// Builds a graph from explicit edges. Self-loops and repeats are ignored.
    ///
    /// # Panics
    /// If an edge references a node `>= nodes`.
    pub fn from_edges(nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut sets = vec![BTreeSet::new(); nodes];
        for (a, b) in edges {
            link(&mut sets, a, b);
        }
        Self::from_sets(sets)
    }

    /// Derives the graph from every student and teacher schedule.
    ///
    /// O(Σ schedule_len²) over all people; schedules are short.
    pub fn build(store: &Store) -> Self {
        let mut sets = vec![BTreeSet::new(); store.sections().len()];

        let student_schedules = store.students().iter().map(|s| &s.schedule);
        let teacher_schedules = store.teachers().iter().map(|t| &t.schedule);
        for schedule in student_schedules.chain(teacher_schedules) {
            for (i, a) in schedule.iter().enumerate() {
                for b in &schedule[i + 1..] {
                    link(&mut sets, a.index(), b.index());
                }
            }
        }

        Self::from_sets(sets)
    }

    fn from_sets(sets: Vec<BTreeSet<usize>>) -> Self {
        let adjacency = sets
            .into_iter()
            .map(|set| set.into_iter().map(SectionId).collect())
            .collect();
        Self { adjacency }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbours of a section, ascending.
    pub fn neighbors(&self, section: SectionId) -> &[SectionId] {
        &self.adjacency[section.index()]
    }

    /// Number of conflicting sections.
    pub fn degree(&self, section: SectionId) -> usize {
        self.adjacency[section.index()].len()
    }

    pub fn are_adjacent(&self, a: SectionId, b: SectionId) -> bool {
        self.adjacency[a.index()].binary_search(&b).is_ok()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }
}

fn link(sets: &mut [BTreeSet<usize>], a: usize, b: usize) {
    if a == b {
        return;
    }
    sets[a].insert(b);
    sets[b].insert(a);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Qualification, Student, StudentId, Subject, Teacher, TeacherId};

    #[test]
    fn test_from_edges_dedup() {
        let g = ConflictGraph::from_edges(3, [(0, 1), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(SectionId(1)), &[SectionId(0), SectionId(2)]);
        assert!(g.are_adjacent(SectionId(2), SectionId(1)));
        assert!(!g.are_adjacent(SectionId(0), SectionId(2)));
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::empty(4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(SectionId(3)), 0);
        assert!(ConflictGraph::empty(0).is_empty());
    }

    #[test]
    fn test_build_from_schedules() {
        let mut store = Store::from_records(
            vec![Student::new("s1"), Student::new("s2")],
            vec![Teacher::new("t1")
                .with_qualification(Subject::Math, Qualification::Preferred)
                .with_qualification(Subject::Asl, Qualification::Qualified)],
        )
        .unwrap();
        let english = store.create_section(Subject::English, Level::Beginner, 7);
        let math = store.create_section(Subject::Math, Level::Beginner, 7);
        let asl = store.create_section(Subject::Asl, Level::Beginner, 7);
        let lonely = store.create_section(Subject::Asl, Level::Advanced, 7);

        // s1 shares english+math, the teacher shares math+asl
        store.enroll(english, StudentId(0), 6).unwrap();
        store.enroll(math, StudentId(0), 6).unwrap();
        store.enroll(math, StudentId(1), 6).unwrap();
        store.assign_teacher(math, TeacherId(0)).unwrap();
        store.assign_teacher(asl, TeacherId(0)).unwrap();

        let g = ConflictGraph::build(&store);
        assert_eq!(g.len(), 4);
        assert!(g.are_adjacent(english, math));
        assert!(g.are_adjacent(math, asl));
        assert!(!g.are_adjacent(english, asl));
        assert_eq!(g.degree(math), 2);
        assert_eq!(g.degree(lonely), 0);
    }

    #[test]
    fn test_shared_student_and_teacher_is_one_edge() {
        let mut store = Store::from_records(
            vec![Student::new("s1")],
            vec![Teacher::new("t1").with_qualification(Subject::Math, Qualification::Preferred)],
        )
        .unwrap();
        let a = store.create_section(Subject::Math, Level::Beginner, 7);
        let b = store.create_section(Subject::Math, Level::Advanced, 7);
        for s in [a, b] {
            store.enroll(s, StudentId(0), 6).unwrap();
            store.assign_teacher(s, TeacherId(0)).unwrap();
        }

        let g = ConflictGraph::build(&store);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(a), &[b]);
    }
}

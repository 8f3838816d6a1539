//! Conflict Graph Builder (§4.2): an undirected graph over candidate
//! crossings, edges marking structural incompatibility.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::crossing::Crossing;

/// Adjacency-set representation of the conflict graph: node -> its
/// conflicting neighbors. Every crossing appears as a key, even ones
/// with no conflicts, so the graph's node set always equals the input
/// overlap list.
pub type ConflictGraph = BTreeMap<Crossing, BTreeSet<Crossing>>;

/// Builds the conflict graph over `overlaps`, considering every
/// `i < j` pair exactly once and adding a symmetric edge whenever
/// either §4.2 condition holds.
pub fn build_conflict_graph(overlaps: &[Crossing]) -> ConflictGraph {
    let mut graph: ConflictGraph = overlaps
        .iter()
        .map(|c| (c.clone(), BTreeSet::new()))
        .collect();

    let mut edge_count = 0usize;
    for i in 0..overlaps.len() {
        for j in (i + 1)..overlaps.len() {
            let x = &overlaps[i];
            let y = &overlaps[j];
            if conflicts(x, y) {
                graph.get_mut(x).unwrap().insert(y.clone());
                graph.get_mut(y).unwrap().insert(x.clone());
                edge_count += 1;
            }
        }
    }
    debug!(
        "conflict graph: {} nodes, {} edges",
        overlaps.len(),
        edge_count
    );
    graph
}

fn conflicts(x: &Crossing, y: &Crossing) -> bool {
    same_letter_slot_conflict(x, y) || duplicate_word_pair_conflict(x, y)
}

fn same_letter_slot_conflict(x: &Crossing, y: &Crossing) -> bool {
    let x_slots = [x.slot_a(), x.slot_b()];
    let y_slots = [y.slot_a(), y.slot_b()];
    x_slots.iter().any(|xs| y_slots.contains(xs))
}

fn duplicate_word_pair_conflict(x: &Crossing, y: &Crossing) -> bool {
    x.word_pair() == y.word_pair()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ab_ba_has_one_edge() {
        let overlaps = vec![Crossing::new("ab", 0, "ba", 1), Crossing::new("ab", 1, "ba", 0)];
        let graph = build_conflict_graph(&overlaps);
        assert_eq!(graph[&overlaps[0]], BTreeSet::from([overlaps[1].clone()]));
        assert_eq!(graph[&overlaps[1]], BTreeSet::from([overlaps[0].clone()]));
    }

    #[test]
    fn same_letter_slot_conflict_detects_shared_index() {
        let x = Crossing::new("abc", 0, "xyz", 1);
        let y = Crossing::new("abc", 0, "pqr", 2);
        assert!(same_letter_slot_conflict(&x, &y));
        assert!(!duplicate_word_pair_conflict(&x, &y));
    }

    #[test]
    fn unrelated_crossings_have_no_edge() {
        let overlaps = vec![
            Crossing::new("abc", 0, "cde", 2),
            Crossing::new("efg", 0, "ghi", 2),
        ];
        let graph = build_conflict_graph(&overlaps);
        assert!(graph[&overlaps[0]].is_empty());
        assert!(graph[&overlaps[1]].is_empty());
    }
}

//! Independent Set Search (§4.3): a deterministic maximal independent
//! set over the conflict graph, and decreasing-cardinality subset
//! enumeration over it.

use itertools::Itertools;
use log::debug;

use crate::conflict::ConflictGraph;
use crate::crossing::Crossing;

/// Seeds with the smallest node, then repeatedly adds the smallest
/// remaining node not adjacent to anything already chosen.
pub fn maximal_independent_set(graph: &ConflictGraph) -> Vec<Crossing> {
    let mut chosen: Vec<Crossing> = Vec::new();
    let mut excluded: std::collections::BTreeSet<Crossing> = std::collections::BTreeSet::new();

    for node in graph.keys() {
        if excluded.contains(node) {
            continue;
        }
        chosen.push(node.clone());
        excluded.insert(node.clone());
        for neighbor in &graph[node] {
            excluded.insert(neighbor.clone());
        }
    }

    debug!(
        "maximal independent set: {} of {} candidate crossings",
        chosen.len(),
        graph.len()
    );
    chosen
}

/// Subsets of `set` by decreasing size, each group in lexicographic
/// order of element indices, down to and including the empty subset —
/// a word list needing no crossings (e.g. a single word) is feasible
/// with zero of them.
pub fn subsets_by_decreasing_size(set: &[Crossing]) -> impl Iterator<Item = Vec<Crossing>> + '_ {
    (0..=set.len())
        .rev()
        .flat_map(move |k| set.iter().cloned().combinations(k))
}

//! Feasibility & Orientation Solver (§4.4): connectivity and bipartite
//! 2-coloring of the word-crossing graph induced by a candidate subset
//! of crossings.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::trace;

use crate::crossing::Crossing;
use crate::word::Orientation;

/// Undirected graph over words; edges are selected crossings.
pub type WordCrossingGraph = BTreeMap<String, BTreeSet<String>>;

pub fn build_word_crossing_graph(words: &[String], subset: &[Crossing]) -> WordCrossingGraph {
    let mut graph: WordCrossingGraph = words.iter().map(|w| (w.clone(), BTreeSet::new())).collect();
    for crossing in subset {
        graph
            .entry(crossing.word_a.clone())
            .or_default()
            .insert(crossing.word_b.clone());
        graph
            .entry(crossing.word_b.clone())
            .or_default()
            .insert(crossing.word_a.clone());
    }
    graph
}

/// Single BFS pass from `root`: verifies connectivity over all of
/// `graph` and produces a 2-coloring (color 0 -> horizontal, color 1 ->
/// vertical). `None` if disconnected or not bipartite.
pub fn solve_orientations(
    graph: &WordCrossingGraph,
    root: &str,
) -> Option<BTreeMap<String, Orientation>> {
    let mut colors: BTreeMap<String, Orientation> = BTreeMap::new();
    colors.insert(root.to_owned(), Orientation::Horizontal);

    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(root.to_owned());

    while let Some(current) = queue.pop_front() {
        let current_color = colors[&current];
        let next_color = current_color.opposite();
        for neighbor in graph.get(&current).into_iter().flatten() {
            match colors.get(neighbor) {
                None => {
                    colors.insert(neighbor.clone(), next_color);
                    queue.push_back(neighbor.clone());
                }
                Some(&existing) if existing != next_color => {
                    trace!("word-crossing graph is not bipartite at {neighbor}");
                    return None;
                }
                Some(_) => {}
            }
        }
    }

    if colors.len() != graph.len() {
        trace!(
            "word-crossing graph is disconnected: reached {} of {} words",
            colors.len(),
            graph.len()
        );
        return None;
    }

    Some(colors)
}

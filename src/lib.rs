//! Deterministic construction of a compact crossword-style layout from
//! a list of words.
//!
//! The pipeline (§2): enumerate candidate letter crossings, build a
//! conflict graph over them, take a deterministic maximal independent
//! set, then try its subsets by decreasing cardinality — for each,
//! check the word-crossing graph is connected and bipartite, assign
//! horizontal/vertical orientations from the 2-coloring, and attempt a
//! breadth-first placement. The first subset that places every word
//! wins.

pub mod config;
pub mod conflict;
pub mod crossing;
pub mod error;
pub mod independent_set;
pub mod layout;
pub mod orientation;
pub mod overlap;
pub mod placement;
pub mod word;

use std::collections::BTreeSet;

use log::{debug, info};

pub use config::{LayoutConfig, SizeConstraint};
pub use crossing::Crossing;
pub use error::LayoutError;
pub use layout::Layout;

/// Builds a crossword layout for `words` under `config`.
///
/// `words` must be non-empty and pairwise distinct (§3); violating
/// either is a contract violation (§7) reported as an `Err`, not folded
/// into the search. Returns `Err(LayoutError::NoFeasibleLayout)` if the
/// search exhausts every subset of the maximal independent set without
/// producing a placement — this is the expected outcome for word lists
/// with no usable crossings (§8 scenario 2), not a bug.
pub fn build_layout(words: &[String], config: &LayoutConfig) -> Result<Layout, LayoutError> {
    validate_words(words)?;

    let overlaps = overlap::enumerate_overlaps(words);
    debug!("{} candidate crossings over {} words", overlaps.len(), words.len());

    let conflict_graph = conflict::build_conflict_graph(&overlaps);
    let maximal_set = independent_set::maximal_independent_set(&conflict_graph);

    let mut attempts = 0usize;
    for subset in independent_set::subsets_by_decreasing_size(&maximal_set) {
        attempts += 1;
        let word_crossing_graph = orientation::build_word_crossing_graph(words, &subset);

        let Some(orientations) = orientation::solve_orientations(&word_crossing_graph, &words[0])
        else {
            continue;
        };

        let Some(layout) =
            placement::place_words(words, &orientations, &word_crossing_graph, &subset, config)
        else {
            continue;
        };

        let (rows, cols) = layout.size();
        if !config.size_constraint.is_satisfied_by(rows, cols) {
            continue;
        }

        info!(
            "{} crossings in feasible layout after {} attempt(s)",
            subset.len(),
            attempts
        );
        return Ok(layout);
    }

    info!("no maximal subset could be realized after {attempts} attempt(s)");
    Err(LayoutError::NoFeasibleLayout)
}

fn validate_words(words: &[String]) -> Result<(), LayoutError> {
    if words.is_empty() {
        return Err(LayoutError::EmptyWordList);
    }
    let mut seen = BTreeSet::new();
    for word in words {
        if !seen.insert(word) {
            return Err(LayoutError::DuplicateWord(word.clone()));
        }
    }
    Ok(())
}

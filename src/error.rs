//! Error taxonomy (§7): contract violations the core's public entry
//! point refuses to process, plus the "no layout found" outcome.
//!
//! Subset infeasibility (disconnected/non-bipartite word-crossing
//! graphs, placement conflicts) never surfaces here — it is handled
//! internally by the search loop in `lib.rs` as a signal to try the
//! next subset.

use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum LayoutError {
    #[error("no feasible layout found for the given word list")]
    NoFeasibleLayout,
    #[error("duplicate word in input: {0}")]
    DuplicateWord(String),
    #[error("word list is empty")]
    EmptyWordList,
}

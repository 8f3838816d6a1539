//! Configuration record threaded through the core, generalizing the
//! teacher's `CrosswordSettings`/`CrosswordConstraint` pair down to the
//! single boundary-exclusion flag spec.md's core interface names, plus
//! the optional grid-size constraints the teacher crate also supports.

use serde::{Deserialize, Serialize};

/// An optional bound on the final grid's dimensions, checked after a
/// candidate layout is fully placed. `None` means unconstrained.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConstraint {
    pub max_rows: Option<u32>,
    pub max_cols: Option<u32>,
    pub max_area: Option<u64>,
}

impl SizeConstraint {
    pub fn is_satisfied_by(&self, rows: u32, cols: u32) -> bool {
        self.max_rows.map_or(true, |m| rows <= m)
            && self.max_cols.map_or(true, |m| cols <= m)
            && self
                .max_area
                .map_or(true, |m| (rows as u64) * (cols as u64) <= m)
    }
}

/// Settings for a single [`build_layout`](crate::build_layout) call.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// §4.5's optional boundary exclusion policy: isolate each word's
    /// ends and sides from any other word except at sanctioned
    /// crossings.
    pub boundary_exclusion: bool,
    pub size_constraint: SizeConstraint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_size_is_always_satisfied() {
        let constraint = SizeConstraint::default();
        assert!(constraint.is_satisfied_by(1000, 1000));
    }

    #[test]
    fn max_area_rejects_oversized_grids() {
        let constraint = SizeConstraint {
            max_area: Some(20),
            ..Default::default()
        };
        assert!(constraint.is_satisfied_by(4, 5));
        assert!(!constraint.is_satisfied_by(5, 5));
    }
}

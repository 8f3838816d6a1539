//! The `Layout` aggregate (§3) and Layout Renderer (§4.6).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::word::{Anchor, Orientation};

/// Glyph used for an unoccupied cell in the rendered grid (§6).
pub const EMPTY_GLYPH: char = '-';

/// A single word's claim on a cell: its character, the word it belongs
/// to, the letter index within that word, and the word's orientation.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Occupant {
    pub ch: char,
    pub word: String,
    pub letter_index: usize,
    pub orientation: Orientation,
}

/// A crossword layout: words placed on an integer grid, plus the
/// derived per-cell occupancy map. `words` and `coords` share keys
/// (words, cells) but carry no back-references to one another;
/// occupants reference a word by value.
#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Layout {
    pub words: BTreeMap<String, (Anchor, Orientation)>,
    pub coords: BTreeMap<(i32, i32), Vec<Occupant>>,
}

/// Why a word could not be placed (§4.5's place-word operation).
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PlacementConflict {
    /// A cell already holds a different character than the incoming one.
    LetterMismatch,
    /// A cell already holds two occupants (the occupancy bound).
    CellFull,
    /// The word is already placed at a different anchor/orientation.
    Reasserted,
    /// Boundary exclusion forbids this placement (an end or side cell
    /// adjacent to the word is occupied).
    BoundaryViolation,
}

impl Layout {
    pub fn new() -> Layout {
        Layout::default()
    }

    /// Places `word` at `anchor` with `orientation`. Idempotent: an
    /// identical re-request (same word, same anchor, same orientation)
    /// succeeds without mutating state; a conflicting re-request for an
    /// already-placed word fails with `Reasserted`.
    pub fn place_word(
        &mut self,
        word: &str,
        anchor: Anchor,
        orientation: Orientation,
        boundary_exclusion: bool,
    ) -> Result<(), PlacementConflict> {
        if let Some(&(existing_anchor, existing_orientation)) = self.words.get(word) {
            return if existing_anchor == anchor && existing_orientation == orientation {
                Ok(())
            } else {
                Err(PlacementConflict::Reasserted)
            };
        }

        let cells: Vec<(i32, i32)> = (0..word.chars().count())
            .map(|i| anchor.cell_at(orientation, i))
            .collect();

        if boundary_exclusion {
            self.check_boundary_exclusion(&cells, anchor, orientation)?;
        }

        for (cell, ch) in cells.iter().zip(word.chars()) {
            match self.coords.get(cell).map_or(0, Vec::len) {
                0 => {}
                1 => {
                    let existing = &self.coords[cell][0];
                    if existing.ch != ch || existing.orientation == orientation {
                        return Err(PlacementConflict::LetterMismatch);
                    }
                }
                _ => return Err(PlacementConflict::CellFull),
            }
        }

        for (index, (cell, ch)) in cells.iter().zip(word.chars()).enumerate() {
            self.coords.entry(*cell).or_default().push(Occupant {
                ch,
                word: word.to_owned(),
                letter_index: index,
                orientation,
            });
        }

        self.words.insert(word.to_owned(), (anchor, orientation));
        Ok(())
    }

    fn check_boundary_exclusion(
        &self,
        cells: &[(i32, i32)],
        anchor: Anchor,
        orientation: Orientation,
    ) -> Result<(), PlacementConflict> {
        let is_empty = |cell: &(i32, i32)| {
            self.coords.get(cell).map_or(true, |occs| occs.is_empty())
        };

        let before = match orientation {
            Orientation::Horizontal => (anchor.row, anchor.col - 1),
            Orientation::Vertical => (anchor.row - 1, anchor.col),
        };
        let last = *cells.last().unwrap();
        let after = match orientation {
            Orientation::Horizontal => (last.0, last.1 + 1),
            Orientation::Vertical => (last.0 + 1, last.1),
        };
        if !is_empty(&before) || !is_empty(&after) {
            return Err(PlacementConflict::BoundaryViolation);
        }

        for cell in cells {
            if !is_empty(cell) {
                // An existing occupant here means this is a sanctioned
                // crossing cell, not a newly written one; the side
                // adjacency rule only applies to fresh cells.
                continue;
            }
            let (side_a, side_b) = match orientation {
                Orientation::Horizontal => ((cell.0 - 1, cell.1), (cell.0 + 1, cell.1)),
                Orientation::Vertical => ((cell.0, cell.1 - 1), (cell.0, cell.1 + 1)),
            };
            if !is_empty(&side_a) || !is_empty(&side_b) {
                return Err(PlacementConflict::BoundaryViolation);
            }
        }

        Ok(())
    }

    /// The inclusive bounding box `(min_row, min_col, max_row, max_col)`
    /// over all occupied cells. `None` if the layout is empty.
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        let mut iter = self.coords.keys();
        let &(first_row, first_col) = iter.next()?;
        let mut bbox = (first_row, first_col, first_row, first_col);
        for &(row, col) in iter {
            bbox.0 = bbox.0.min(row);
            bbox.1 = bbox.1.min(col);
            bbox.2 = bbox.2.max(row);
            bbox.3 = bbox.3.max(col);
        }
        Some(bbox)
    }

    /// The `(rows, cols)` of the minimum rectangle containing every
    /// placed word, after normalization.
    pub fn size(&self) -> (u32, u32) {
        match self.bounding_box() {
            Some((min_r, min_c, max_r, max_c)) => {
                ((max_r - min_r + 1) as u32, (max_c - min_c + 1) as u32)
            }
            None => (0, 0),
        }
    }

    /// Renders a normalized rectangular character grid (§4.6): the
    /// minimum row and column become 0, occupied cells show their
    /// canonical (first-occupant) character, empty cells show
    /// [`EMPTY_GLYPH`]. Rows are newline-separated with a trailing
    /// newline after the last row.
    pub fn render(&self) -> String {
        let Some((min_row, min_col, max_row, max_col)) = self.bounding_box() else {
            return String::new();
        };
        let rows = (max_row - min_row + 1) as usize;
        let cols = (max_col - min_col + 1) as usize;

        let mut grid = vec![vec![EMPTY_GLYPH; cols]; rows];
        for (&(row, col), occupants) in &self.coords {
            if let Some(first) = occupants.first() {
                let r = (row - min_row) as usize;
                let c = (col - min_col) as usize;
                grid[r][c] = first.ch;
            }
        }

        let mut out = String::with_capacity((cols + 1) * rows);
        for row in grid {
            let line: String = row.into_iter().collect();
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn opposite(&self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Default, Debug, Serialize, Deserialize)]
pub struct Anchor {
    pub row: i32,
    pub col: i32,
}

impl Anchor {
    pub fn new(row: i32, col: i32) -> Anchor {
        Anchor { row, col }
    }

    pub fn cell_at(&self, orientation: Orientation, letter_index: usize) -> (i32, i32) {
        match orientation {
            Orientation::Horizontal => (self.row, self.col + letter_index as i32),
            Orientation::Vertical => (self.row + letter_index as i32, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Orientation::Horizontal.opposite(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.opposite(), Orientation::Horizontal);
    }

    #[test]
    fn cell_at_walks_the_right_axis() {
        let anchor = Anchor::new(2, 3);
        assert_eq!(anchor.cell_at(Orientation::Horizontal, 4), (2, 7));
        assert_eq!(anchor.cell_at(Orientation::Vertical, 4), (6, 3));
    }
}

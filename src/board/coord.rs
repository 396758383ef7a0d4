//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A cell position on the board, `(row, col)`, both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: u16,
    /// Column index.
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on a `size × size` board.
    #[must_use]
    pub const fn within(self, size: u16) -> bool {
        self.row < size && self.col < size
    }

    /// Check if `other` is one of the 8 cells around this one.
    #[must_use]
    pub fn touches(self, other: Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u16, u16)> for Coord {
    fn from((row, col): (u16, u16)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within() {
        assert!(Coord::new(0, 0).within(1));
        assert!(Coord::new(4, 4).within(5));
        assert!(!Coord::new(5, 0).within(5));
        assert!(!Coord::new(0, 5).within(5));
    }

    #[test]
    fn test_touches() {
        let center = Coord::new(2, 2);
        assert!(center.touches(Coord::new(1, 1)));
        assert!(center.touches(Coord::new(3, 2)));
        assert!(!center.touches(center));
        assert!(!center.touches(Coord::new(0, 2)));
    }

    #[test]
    fn test_display_and_from() {
        let coord: Coord = (3u16, 7u16).into();
        assert_eq!(coord, Coord::new(3, 7));
        assert_eq!(coord.to_string(), "(3, 7)");
    }
}

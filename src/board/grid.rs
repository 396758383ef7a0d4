//! The square board and its cells.
//!
//! Cells are stored row-major in a flat `Vec`. Each cell keeps the
//! coordinates of its up-to-8 neighbours, computed once when the board is
//! built, so cells never reference each other directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::content::Content;
use super::coord::Coord;
use crate::core::Player;

/// Neighbour list: 3 for corners, 5 for edges, 8 inside.
pub type Neighbors = SmallVec<[Coord; 8]>;

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    content: Option<Content>,
    neighbors: Neighbors,
}

impl Cell {
    /// Position of this cell.
    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// What occupies the cell, if anything.
    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Coordinates of the adjacent cells.
    #[must_use]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    /// Check if nothing occupies the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Owner of the cell's content, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.content.as_ref().and_then(Content::owner)
    }

    /// Check if the content here belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner() == Some(player)
    }
}

/// Fixed-size `N × N` grid.
///
/// ## Usage
///
/// ```
/// use castle_clash::board::{Board, Content, Coord};
///
/// let mut board = Board::new(3);
/// assert_eq!(board.neighbors(Coord::new(0, 0)).len(), 3);
/// assert_eq!(board.neighbors(Coord::new(1, 1)).len(), 8);
///
/// board.place_content(Coord::new(1, 1), Content::Obstacle);
/// assert!(!board.is_empty_at(Coord::new(1, 1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Build an empty `size × size` board with adjacency precomputed.
    #[must_use]
    pub fn new(size: u16) -> Self {
        let mut cells = Vec::with_capacity(usize::from(size) * usize::from(size));
        for row in 0..size {
            for col in 0..size {
                let coord = Coord::new(row, col);
                cells.push(Cell {
                    coord,
                    content: None,
                    neighbors: Self::compute_neighbors(coord, size),
                });
            }
        }
        Self { size, cells }
    }

    fn compute_neighbors(coord: Coord, size: u16) -> Neighbors {
        let mut neighbors = Neighbors::new();
        let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(size - 1);
        for row in rows {
            let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(size - 1);
            for col in cols {
                let candidate = Coord::new(row, col);
                if candidate != coord {
                    neighbors.push(candidate);
                }
            }
        }
        neighbors
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Check if `coord` is on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.within(self.size)
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col))
    }

    /// Look up a cell. Off-board coordinates give `None`.
    #[must_use]
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    fn cell_at_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index_of(coord).map(move |i| &mut self.cells[i])
    }

    /// Neighbours of `coord`. Empty for off-board coordinates.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        match self.cell_at(coord) {
            Some(cell) => cell.neighbors(),
            None => &[],
        }
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Call `f` on every cell in row-major order.
    pub fn for_each_cell(&self, f: impl FnMut(&Cell)) {
        self.cells.iter().for_each(f);
    }

    /// Content at `coord`, if any.
    #[must_use]
    pub fn content_at(&self, coord: Coord) -> Option<&Content> {
        self.cell_at(coord).and_then(Cell::content)
    }

    /// Check if `coord` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cell_at(coord).is_some_and(Cell::is_empty)
    }

    /// Check if `coord` holds content owned by `player`.
    #[must_use]
    pub fn is_owned_by(&self, coord: Coord, player: Player) -> bool {
        self.cell_at(coord).is_some_and(|cell| cell.is_owned_by(player))
    }

    /// Put `content` on `coord`, returning whatever was there before.
    ///
    /// Off-board coordinates are ignored and hand `content` straight back.
    pub fn place_content(&mut self, coord: Coord, content: Content) -> Option<Content> {
        match self.cell_at_mut(coord) {
            Some(cell) => cell.content.replace(content),
            None => Some(content),
        }
    }

    /// Take the content off `coord`.
    pub fn remove_content(&mut self, coord: Coord) -> Option<Content> {
        self.cell_at_mut(coord).and_then(|cell| cell.content.take())
    }

    /// Empty every cell. Adjacency is kept.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.content = None;
        }
    }

    /// Check if any neighbour of `coord` satisfies `predicate`.
    pub fn has_neighbor(&self, coord: Coord, mut predicate: impl FnMut(&Cell) -> bool) -> bool {
        self.neighbors(coord)
            .iter()
            .filter_map(|&n| self.cell_at(n))
            .any(|cell| predicate(cell))
    }

    /// Coordinates of every cell holding `player`'s castle or units.
    #[must_use]
    pub fn occupied_by(&self, player: Player) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.is_owned_by(player))
            .map(Cell::coord)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_counts() {
        let board = Board::new(5);

        for corner in [(0u16, 0u16), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(board.neighbors(corner.into()).len(), 3, "corner {corner:?}");
        }
        for edge in [(0u16, 2u16), (2, 0), (4, 2), (2, 4)] {
            assert_eq!(board.neighbors(edge.into()).len(), 5, "edge {edge:?}");
        }
        assert_eq!(board.neighbors(Coord::new(2, 2)).len(), 8);
    }

    #[test]
    fn test_neighbors_exclude_self_and_are_adjacent() {
        let board = Board::new(4);
        for cell in board.cells() {
            for &n in cell.neighbors() {
                assert!(cell.coord().touches(n));
                assert!(board.contains(n));
            }
        }
    }

    #[test]
    fn test_neighbors_symmetric() {
        let board = Board::new(6);
        board.for_each_cell(|cell| {
            for &n in cell.neighbors() {
                assert!(board.neighbors(n).contains(&cell.coord()));
            }
        });
    }

    #[test]
    fn test_off_board_lookup() {
        let board = Board::new(3);
        assert!(board.cell_at(Coord::new(3, 0)).is_none());
        assert!(board.neighbors(Coord::new(0, 9)).is_empty());
        assert!(!board.is_empty_at(Coord::new(5, 5)));
    }

    #[test]
    fn test_row_major_order() {
        let board = Board::new(3);
        let coords: Vec<_> = board.cells().map(Cell::coord).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[1], Coord::new(0, 1));
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(coords.len(), 9);
    }

    #[test]
    fn test_place_and_remove_content() {
        let mut board = Board::new(3);
        let coord = Coord::new(1, 2);
        let unit = Content::Unit { owner: Player::Red, clash_cost: 2 };

        assert_eq!(board.place_content(coord, unit.clone()), None);
        assert_eq!(board.content_at(coord), Some(&unit));
        assert!(board.is_owned_by(coord, Player::Red));

        let previous = board.place_content(coord, Content::Obstacle);
        assert_eq!(previous, Some(unit));

        assert_eq!(board.remove_content(coord), Some(Content::Obstacle));
        assert!(board.is_empty_at(coord));
        assert_eq!(board.remove_content(coord), None);
    }

    #[test]
    fn test_place_off_board_returns_content() {
        let mut board = Board::new(2);
        assert_eq!(
            board.place_content(Coord::new(2, 2), Content::Obstacle),
            Some(Content::Obstacle)
        );
    }

    #[test]
    fn test_occupied_by_and_clear() {
        let mut board = Board::new(3);
        board.place_content(Coord::new(0, 0), Content::Castle { owner: Player::Blue, clash_cost: 5 });
        board.place_content(Coord::new(0, 1), Content::Unit { owner: Player::Blue, clash_cost: 2 });
        board.place_content(Coord::new(2, 2), Content::Unit { owner: Player::Red, clash_cost: 2 });
        board.place_content(Coord::new(1, 1), Content::Obstacle);

        assert_eq!(board.occupied_by(Player::Blue), vec![Coord::new(0, 0), Coord::new(0, 1)]);
        assert_eq!(board.occupied_by(Player::Red), vec![Coord::new(2, 2)]);

        assert!(board.has_neighbor(Coord::new(1, 0), |c| c.is_owned_by(Player::Blue)));
        assert!(!board.has_neighbor(Coord::new(2, 0), |c| c.is_owned_by(Player::Blue)));

        board.clear();
        assert!(board.cells().all(Cell::is_empty));
        assert_eq!(board.neighbors(Coord::new(1, 1)).len(), 8);
    }
}

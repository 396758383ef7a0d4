//! Per-player army bookkeeping.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Cells currently holding one player's units.
///
/// Updated incrementally as units are placed and destroyed, and re-checked
/// against the board by connectivity pruning after every action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmySet {
    cells: FxHashSet<Coord>,
}

impl ArmySet {
    /// Create an empty army.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit at `coord`. Returns false if it was already recorded.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Forget the unit at `coord`. Returns false if none was recorded.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord)
    }

    /// Check if a unit is recorded at `coord`.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the army has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over unit cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Unit cells in coordinate order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<_> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Drop every unit.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

//! Move and clash candidate generation.
//!
//! Every round the active player's options are recomputed from scratch by
//! scanning the whole board. A cell is an option only if it touches a cell
//! the player already owns.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord};
use crate::core::{ActionKind, Player};

/// Highlight state of a cell for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileView {
    /// Not an option this round.
    Default,
    /// Empty cell the player can move into.
    Move,
    /// Enemy cell the player can clash.
    Clash,
}

/// The active player's options for one round.
///
/// `moves` and `clashes` are always disjoint and never contain a cell the
/// player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidates {
    moves: FxHashSet<Coord>,
    clashes: FxHashSet<Coord>,
}

impl Candidates {
    /// Compute `player`'s options on `board`.
    ///
    /// - empty cell next to own territory: move
    /// - enemy castle or unit next to own territory: clash
    /// - obstacles, own cells and cells away from own territory: neither
    #[must_use]
    pub fn generate(board: &Board, player: Player) -> Self {
        let mut candidates = Self::default();

        for cell in board.cells() {
            let coord = cell.coord();
            if !board.has_neighbor(coord, |n| n.is_owned_by(player)) {
                continue;
            }

            match cell.owner() {
                None if cell.is_empty() => {
                    candidates.moves.insert(coord);
                }
                Some(owner) if owner != player => {
                    candidates.clashes.insert(coord);
                }
                _ => {}
            }
        }

        tracing::trace!(
            %player,
            moves = candidates.moves.len(),
            clashes = candidates.clashes.len(),
            "generated candidates"
        );

        candidates
    }

    /// Empty cells the player can move into.
    #[must_use]
    pub fn moves(&self) -> &FxHashSet<Coord> {
        &self.moves
    }

    /// Enemy cells the player can clash.
    #[must_use]
    pub fn clashes(&self) -> &FxHashSet<Coord> {
        &self.clashes
    }

    /// Classify `coord` as a move, a clash, or neither.
    #[must_use]
    pub fn kind_of(&self, coord: Coord) -> Option<ActionKind> {
        if self.moves.contains(&coord) {
            Some(ActionKind::Move)
        } else if self.clashes.contains(&coord) {
            Some(ActionKind::Clash)
        } else {
            None
        }
    }

    /// Highlight state of `coord`.
    #[must_use]
    pub fn view_of(&self, coord: Coord) -> TileView {
        match self.kind_of(coord) {
            Some(ActionKind::Move) => TileView::Move,
            Some(ActionKind::Clash) => TileView::Clash,
            None => TileView::Default,
        }
    }

    /// Check if there are no options at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.clashes.is_empty()
    }

    /// Drop all options.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.clashes.clear();
    }
}

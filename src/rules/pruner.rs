//! Connectivity pruning.
//!
//! A unit survives only while a chain of cells owned by the same player,
//! stepping through 8-neighbour adjacency, links it to that player's castle.
//! After every action the engine prunes both players; everything outside the
//! reachable set is destroyed.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::{ArmySet, Board, Coord};
use crate::core::Player;

/// Cells of `player` reachable from the castle at `castle`.
///
/// Breadth-first expansion seeded with the castle's owned neighbours. The
/// castle itself is the root of the search but is not part of the result.
/// If `castle` no longer holds `player`'s castle the result is empty.
#[must_use]
pub fn connected_army(board: &Board, player: Player, castle: Coord) -> FxHashSet<Coord> {
    let mut reached = FxHashSet::default();

    let castle_standing = board
        .content_at(castle)
        .is_some_and(|content| content.is_castle_of(player));
    if !castle_standing {
        return reached;
    }

    let mut frontier = VecDeque::new();
    frontier.push_back(castle);

    while let Some(coord) = frontier.pop_front() {
        for &next in board.neighbors(coord) {
            if next != castle && board.is_owned_by(next, player) && reached.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    reached
}

/// Destroy every unit of `player` that is cut off from its castle.
///
/// Removes the content from the board and the cell from `army`. Castles,
/// obstacles and the other player's cells are never touched. Returns the
/// removed cells in coordinate order.
pub fn prune_disconnected(
    board: &mut Board,
    army: &mut ArmySet,
    player: Player,
    castle: Coord,
) -> Vec<Coord> {
    let connected = connected_army(board, player, castle);

    let mut removed: Vec<Coord> = army
        .iter()
        .filter(|coord| !connected.contains(coord))
        .collect();
    removed.sort_unstable();

    for &coord in &removed {
        army.remove(coord);
        let unit_here = board
            .content_at(coord)
            .is_some_and(|content| content.is_unit_of(player));
        if unit_here {
            board.remove_content(coord);
        }
    }

    if !removed.is_empty() {
        tracing::debug!(%player, count = removed.len(), "pruned disconnected units");
    }

    removed
}

//! Action representation: what a player did and what it caused.
//!
//! A player action is just a target coordinate. The engine classifies it as a
//! move or a clash from the current candidates, applies it and reports back
//! an [`AppliedEffect`]. Every committed action is also kept as an
//! [`ActionRecord`] in the engine history.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::Phase;
use crate::board::Coord;

/// The two kinds of action a player can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Place a new unit on an empty cell next to own territory (1 point).
    Move,
    /// Destroy enemy content next to own territory and take the cell.
    Clash,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Move => write!(f, "move"),
            ActionKind::Clash => write!(f, "clash"),
        }
    }
}

/// Outcome of a successful `submit_action`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEffect {
    /// Cell the action targeted.
    pub target: Coord,

    /// Whether it was a move or a clash.
    pub kind: ActionKind,

    /// Action points spent.
    pub cost: u32,

    /// Units removed by connectivity pruning, in coordinate order.
    pub pruned: Vec<Coord>,

    /// Phase after the action (and any turn switch) resolved.
    pub phase: Phase,
}

impl AppliedEffect {
    /// Check if this action ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }
}

/// A committed action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The targeted cell.
    pub target: Coord,

    /// Move or clash.
    pub kind: ActionKind,

    /// Action points spent.
    pub cost: u32,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

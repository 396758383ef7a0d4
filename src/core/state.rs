//! Turn state and the phase reported to callers.
//!
//! ## TurnState
//!
//! Mutable bookkeeping owned by the engine:
//! - Active player and remaining action points
//! - Turn number and action sequence within the turn
//! - Winner, once a castle falls
//!
//! ## Phase
//!
//! Read-only view handed to the presentation layer: either the game is in
//! progress for a player with some points left, or it has been won.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// `player` is choosing actions with `action_points` left.
    InProgress {
        /// Player to act.
        player: Player,
        /// Points left this round.
        action_points: u32,
    },
    /// `player` captured the enemy castle. Terminal.
    Won {
        /// The winner.
        player: Player,
    },
}

impl Phase {
    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won { .. })
    }
}

/// Status line in the form shown on the HUD.
///
/// ```
/// use castle_clash::core::{Phase, Player};
///
/// let phase = Phase::InProgress { player: Player::Blue, action_points: 4 };
/// assert_eq!(phase.to_string(), "BLUE PLAYER MOVE, ACTION POINTS: 4");
///
/// let phase = Phase::Won { player: Player::Red };
/// assert_eq!(phase.to_string(), "RED PLAYER WON");
/// ```
impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress { player, action_points } => write!(
                f,
                "{} PLAYER MOVE, ACTION POINTS: {}",
                player.label(),
                action_points
            ),
            Phase::Won { player } => write!(f, "{} PLAYER WON", player.label()),
        }
    }
}

/// Turn bookkeeping. Mutated only by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player whose round it is.
    pub active_player: Player,

    /// Points left in the current round.
    pub action_points: u32,

    /// Turn number (starts at 1, increments on every player switch).
    pub turn_number: u32,

    /// Action sequence within the turn.
    pub action_sequence: u32,

    winner: Option<Player>,
}

impl TurnState {
    /// Create the state for the first round.
    #[must_use]
    pub fn new(active_player: Player, action_points: u32) -> Self {
        Self {
            active_player,
            action_points,
            turn_number: 1,
            action_sequence: 0,
            winner: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(player) => Phase::Won { player },
            None => Phase::InProgress {
                player: self.active_player,
                action_points: self.action_points,
            },
        }
    }

    /// Winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Deduct `cost` points. Callers check affordability first.
    pub fn spend(&mut self, cost: u32) {
        self.action_points = self.action_points.saturating_sub(cost);
    }

    /// Record `player` as the winner.
    pub fn declare_winner(&mut self, player: Player) {
        self.winner = Some(player);
    }

    /// Hand the round to the other player with a fresh budget.
    pub fn switch_player(&mut self, action_points: u32) {
        self.active_player = self.active_player.opponent();
        self.action_points = action_points;
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}

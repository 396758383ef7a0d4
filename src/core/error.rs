//! Error taxonomy.
//!
//! Every error is recoverable: a rejected action or configuration leaves the
//! engine exactly as it was before the call.

use crate::board::Coord;

use super::player::Player;

/// Reasons `submit_action` rejects a target.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The coordinate is in neither the move nor the clash candidates.
    #[error("{0} is not a legal move or clash target")]
    InvalidTarget(Coord),

    /// The clash costs more than the active player has left.
    #[error("clash costs {required} action points but only {available} remain")]
    InsufficientActionPoints {
        /// Cost of the clashed content.
        required: u32,
        /// Points left in the current round.
        available: u32,
    },

    /// The game already has a winner.
    #[error("game is over, {winner} won")]
    GameAlreadyOver {
        /// Player who captured the enemy castle.
        winner: Player,
    },
}

/// Reasons a [`GameConfig`](super::GameConfig) cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The board cannot hold two castles.
    #[error("board size {size} is too small, need at least {min}")]
    BoardTooSmall {
        /// Requested edge length.
        size: u16,
        /// Smallest accepted edge length.
        min: u16,
    },

    /// A castle coordinate lies outside the board.
    #[error("{player} castle at {coord} is outside a {size}x{size} board")]
    CastleOffBoard {
        /// Owner of the misplaced castle.
        player: Player,
        /// Configured coordinate.
        coord: Coord,
        /// Board edge length.
        size: u16,
    },

    /// Both castles were configured on the same cell.
    #[error("both castles are placed at {0}")]
    DuplicateCastle(Coord),

    /// Not enough free cells to place the obstacles.
    #[error("{requested} obstacles requested, at most {max} fit")]
    TooManyObstacles {
        /// Configured obstacle count.
        requested: usize,
        /// Largest accepted obstacle count.
        max: usize,
    },

    /// Clash costs must be at least one action point.
    #[error("clash cost for {0} must be at least 1")]
    ZeroClashCost(&'static str),

    /// No action-point draw can ever pay this clash cost.
    #[error("clash cost {cost} for {kind} exceeds the largest budget of {max}")]
    ClashCostUnreachable {
        /// Which content the cost applies to.
        kind: &'static str,
        /// Configured cost.
        cost: u32,
        /// Largest action-point draw.
        max: u32,
    },
}

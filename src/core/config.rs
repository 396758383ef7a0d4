//! Game configuration types.
//!
//! Callers configure the engine at startup by providing:
//! - Board size and castle placements
//! - `ClashCosts`: action points needed to clash units and castles
//! - Obstacle count and the starting player
//!
//! `GameConfig::validate` rejects anything the engine cannot start from.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Player, PlayerMap};
use super::rng::ACTION_POINTS_RANGE;
use crate::board::Coord;

/// Smallest board edge that can hold two castles.
pub const MIN_BOARD_SIZE: u16 = 2;

/// Action points required to clash each kind of owned content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClashCosts {
    /// Cost to destroy an enemy unit.
    pub unit: u32,
    /// Cost to destroy the enemy castle.
    pub castle: u32,
}

impl Default for ClashCosts {
    fn default() -> Self {
        Self { unit: 2, castle: 5 }
    }
}

/// Complete configuration for one game.
///
/// ## Example
///
/// ```
/// use castle_clash::board::Coord;
/// use castle_clash::core::{GameConfig, Player};
///
/// let config = GameConfig::new(5)
///     .with_castle(Player::Red, Coord::new(0, 0))
///     .with_castle(Player::Blue, Coord::new(4, 4))
///     .with_obstacles(3)
///     .starting_with(Player::Blue);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of the square board.
    pub board_size: u16,

    /// Player who acts first.
    pub initial_player: Player,

    /// Castle placement per player.
    pub castles: PlayerMap<Coord>,

    /// Number of obstacles scattered on empty cells at start.
    pub obstacle_count: usize,

    /// Clash costs handed to the standard content factory.
    pub clash_costs: ClashCosts,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(8).with_obstacles(6)
    }
}

impl GameConfig {
    /// Create a configuration for a `board_size × board_size` board.
    ///
    /// Castles go to opposite corners, Red starts, no obstacles.
    #[must_use]
    pub fn new(board_size: u16) -> Self {
        let far = board_size.saturating_sub(1);
        Self {
            board_size,
            initial_player: Player::Red,
            castles: PlayerMap::from_pair(Coord::new(0, 0), Coord::new(far, far)),
            obstacle_count: 0,
            clash_costs: ClashCosts::default(),
        }
    }

    /// Place a player's castle.
    #[must_use]
    pub fn with_castle(mut self, player: Player, coord: Coord) -> Self {
        self.castles[player] = coord;
        self
    }

    /// Set the number of random obstacles.
    #[must_use]
    pub fn with_obstacles(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn starting_with(mut self, player: Player) -> Self {
        self.initial_player = player;
        self
    }

    /// Set the clash costs.
    #[must_use]
    pub fn with_clash_costs(mut self, costs: ClashCosts) -> Self {
        self.clash_costs = costs;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.board_size) * usize::from(self.board_size)
    }

    /// Largest obstacle count this board accepts.
    ///
    /// Strictly below the cells left after both castles.
    #[must_use]
    pub fn max_obstacles(&self) -> usize {
        self.cell_count().saturating_sub(3)
    }

    /// Check that a game can start from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
            });
        }

        for (player, &coord) in self.castles.iter() {
            if coord.row >= self.board_size || coord.col >= self.board_size {
                return Err(ConfigError::CastleOffBoard {
                    player,
                    coord,
                    size: self.board_size,
                });
            }
        }

        if self.castles[Player::Red] == self.castles[Player::Blue] {
            return Err(ConfigError::DuplicateCastle(self.castles[Player::Red]));
        }

        if self.obstacle_count > self.max_obstacles() {
            return Err(ConfigError::TooManyObstacles {
                requested: self.obstacle_count,
                max: self.max_obstacles(),
            });
        }

        let max = *ACTION_POINTS_RANGE.end();
        for (kind, cost) in [("unit", self.clash_costs.unit), ("castle", self.clash_costs.castle)] {
            if cost == 0 {
                return Err(ConfigError::ZeroClashCost(kind));
            }
            if cost > max {
                return Err(ConfigError::ClashCostUnreachable { kind, cost, max });
            }
        }

        Ok(())
    }
}

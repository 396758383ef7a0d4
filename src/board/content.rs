//! What can occupy a cell, and the factory that produces it.
//!
//! Content is a closed set: castles and units belong to a player and can be
//! clashed for a price, obstacles belong to nobody and stay for the whole
//! game. Behaviour differences are handled by matching on [`Content`].

use serde::{Deserialize, Serialize};

use crate::core::{ClashCosts, Player};

/// Discriminant of [`Content`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    /// A player's castle.
    Castle,
    /// A player's army unit.
    Unit,
    /// Impassable, ownerless scenery.
    Obstacle,
}

/// An entity sitting on a cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Content {
    /// The anchor of a player's territory. Losing it loses the game.
    Castle {
        /// Owning player.
        owner: Player,
        /// Action points needed to clash it.
        clash_cost: u32,
    },
    /// A unit of a player's army.
    Unit {
        /// Owning player.
        owner: Player,
        /// Action points needed to clash it.
        clash_cost: u32,
    },
    /// Scenery that blocks the cell.
    Obstacle,
}

impl Content {
    /// The kind of this content.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Content::Castle { .. } => ContentKind::Castle,
            Content::Unit { .. } => ContentKind::Unit,
            Content::Obstacle => ContentKind::Obstacle,
        }
    }

    /// Owning player, `None` for obstacles.
    #[must_use]
    pub const fn owner(&self) -> Option<Player> {
        match self {
            Content::Castle { owner, .. } | Content::Unit { owner, .. } => Some(*owner),
            Content::Obstacle => None,
        }
    }

    /// Clash cost, `None` for obstacles.
    #[must_use]
    pub const fn clash_cost(&self) -> Option<u32> {
        match self {
            Content::Castle { clash_cost, .. } | Content::Unit { clash_cost, .. } => {
                Some(*clash_cost)
            }
            Content::Obstacle => None,
        }
    }

    /// Check if this content belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Check if this is `player`'s unit.
    #[must_use]
    pub fn is_unit_of(&self, player: Player) -> bool {
        matches!(self, Content::Unit { owner, .. } if *owner == player)
    }

    /// Check if this is `player`'s castle.
    #[must_use]
    pub fn is_castle_of(&self, player: Player) -> bool {
        matches!(self, Content::Castle { owner, .. } if *owner == player)
    }
}

/// Produces content for the engine.
///
/// The engine never builds [`Content`] itself; presentation layers can supply
/// their own factory to attach per-player costs or track instantiation.
pub trait ContentFactory {
    /// A castle for `player`.
    fn create_castle(&mut self, player: Player) -> Content;

    /// A unit for `player`.
    fn create_unit(&mut self, player: Player) -> Content;

    /// An obstacle.
    fn create_obstacle(&mut self) -> Content;
}

/// Factory using the same [`ClashCosts`] for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardContentFactory {
    costs: ClashCosts,
}

impl StandardContentFactory {
    /// Create a factory with the given clash costs.
    #[must_use]
    pub const fn new(costs: ClashCosts) -> Self {
        Self { costs }
    }
}

impl ContentFactory for StandardContentFactory {
    fn create_castle(&mut self, player: Player) -> Content {
        Content::Castle {
            owner: player,
            clash_cost: self.costs.castle,
        }
    }

    fn create_unit(&mut self, player: Player) -> Content {
        Content::Unit {
            owner: player,
            clash_cost: self.costs.unit,
        }
    }

    fn create_obstacle(&mut self) -> Content {
        Content::Obstacle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_accessors() {
        let castle = Content::Castle { owner: Player::Red, clash_cost: 5 };
        assert_eq!(castle.kind(), ContentKind::Castle);
        assert_eq!(castle.owner(), Some(Player::Red));
        assert_eq!(castle.clash_cost(), Some(5));
        assert!(castle.is_castle_of(Player::Red));
        assert!(!castle.is_unit_of(Player::Red));

        let unit = Content::Unit { owner: Player::Blue, clash_cost: 2 };
        assert_eq!(unit.kind(), ContentKind::Unit);
        assert!(unit.is_owned_by(Player::Blue));
        assert!(!unit.is_owned_by(Player::Red));
        assert!(unit.is_unit_of(Player::Blue));

        let obstacle = Content::Obstacle;
        assert_eq!(obstacle.kind(), ContentKind::Obstacle);
        assert_eq!(obstacle.owner(), None);
        assert_eq!(obstacle.clash_cost(), None);
        assert!(!obstacle.is_owned_by(Player::Red));
    }

    #[test]
    fn test_standard_factory() {
        let mut factory = StandardContentFactory::new(ClashCosts { unit: 1, castle: 4 });

        assert_eq!(
            factory.create_castle(Player::Blue),
            Content::Castle { owner: Player::Blue, clash_cost: 4 }
        );
        assert_eq!(
            factory.create_unit(Player::Red),
            Content::Unit { owner: Player::Red, clash_cost: 1 }
        );
        assert_eq!(factory.create_obstacle(), Content::Obstacle);
    }
}

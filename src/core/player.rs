//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the game, `Red` and `Blue`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The red side.
    Red,
    /// The blue side.
    Blue,
}

impl Player {
    /// Both players in pruning order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Upper-case name used in status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Player::Red => "RED",
            Player::Blue => "BLUE",
        }
    }

    /// Iterate over both players.
    ///
    /// ```
    /// use castle_clash::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::Red, Player::Blue]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use castle_clash::core::{Player, PlayerMap};
///
/// let mut units: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// units[Player::Blue] = 4;
///
/// assert_eq!(units[Player::Red], 0);
/// assert_eq!(units[Player::Blue], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `Player` for each slot.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Red), factory(Player::Blue)],
        }
    }

    /// Create a PlayerMap from explicit red and blue values.
    pub fn from_pair(red: T, blue: T) -> Self {
        Self { data: [red, blue] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::Red.index(), 0);
        assert_eq!(Player::Blue.index(), 1);
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(format!("{}", Player::Blue), "Blue");
        assert_eq!(Player::Red.label(), "RED");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::Red], 0);
        assert_eq!(map[Player::Blue], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::Red] = 10;
        *map.get_mut(Player::Blue) += 20;

        assert_eq!(map[Player::Red], 10);
        assert_eq!(map[Player::Blue], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair("r", "b");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::Red, &"r"), (Player::Blue, &"b")]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}

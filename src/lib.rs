//! # castle-clash
//!
//! Rules engine for a two-player, turn-based territorial conquest game on a
//! square grid.
//!
//! ## Rules in brief
//!
//! 1. **Castles**: each player starts with one castle. Capturing the enemy
//!    castle wins the game.
//!
//! 2. **Action points**: a round starts with a budget drawn from 1..=6.
//!    Moving into an empty cell next to own territory costs 1; clashing an
//!    enemy unit or castle next to own territory costs that content's clash
//!    cost. The turn passes once the budget is spent.
//!
//! 3. **Connectivity**: after every action, units no longer linked to their
//!    castle through a chain of same-player cells (8-neighbour adjacency)
//!    are destroyed.
//!
//! ## Architecture
//!
//! - **Single owner**: one `TurnEngine` value holds the board, armies and
//!   turn state. No globals.
//!
//! - **Seams**: content comes from a `ContentFactory`, randomness from a
//!   `RandomSource`. Tests pin both.
//!
//! - **Atomic actions**: an action is validated completely before the first
//!   mutation, so a rejected action leaves no trace.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, actions, turn state, errors
//! - `board`: coordinates, cells, content, army bookkeeping
//! - `rules`: connectivity pruner, move generator, turn engine

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng, RandomSource, ScriptedSource,
    GameConfig, ClashCosts,
    ActionKind, ActionRecord, AppliedEffect,
    Phase, TurnState,
    ActionError, ConfigError,
};

pub use crate::board::{
    Coord, Board, Cell, Content, ContentKind, ContentFactory, StandardContentFactory, ArmySet,
};

pub use crate::rules::{Candidates, TileView, TurnEngine, connected_army, prune_disconnected};

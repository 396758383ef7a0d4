//! Core engine types: players, RNG, configuration, actions, state, errors.
//!
//! This module contains the building blocks shared by the board and the
//! rules. Callers configure a game via `GameConfig` rather than modifying
//! the engine.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedSource, ACTION_POINTS_RANGE};
pub use config::{ClashCosts, GameConfig, MIN_BOARD_SIZE};
pub use action::{ActionKind, ActionRecord, AppliedEffect};
pub use state::{Phase, TurnState};
pub use error::{ActionError, ConfigError};

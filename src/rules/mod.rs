//! Game rules: connectivity pruning, candidate generation and the turn engine.
//!
//! The engine calls into the pruner and the move generator after every
//! action; both are plain functions over a `Board` and can be used on their
//! own.

pub mod pruner;
pub mod movegen;
pub mod engine;

pub use pruner::{connected_army, prune_disconnected};
pub use movegen::{Candidates, TileView};
pub use engine::TurnEngine;

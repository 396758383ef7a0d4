//! Board model: coordinates, cells, content and army bookkeeping.
//!
//! The board is a flat array of cells with precomputed 8-neighbour
//! adjacency. Content on a cell is owned by that cell; the engine creates it
//! through a [`ContentFactory`] and drops it when it is destroyed.

pub mod coord;
pub mod content;
pub mod grid;
pub mod army;

pub use coord::Coord;
pub use content::{Content, ContentFactory, ContentKind, StandardContentFactory};
pub use grid::{Board, Cell, Neighbors};
pub use army::ArmySet;

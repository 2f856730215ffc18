//! Core rules engine (no_std compatible)
//!
//! Ship geometry, fleet placement, attack resolution and the automated
//! targeting heuristic. Depends only on `alloc`, `rand` and the `log` facade.

pub mod board;
pub mod cellset;
pub mod common;
pub mod config;
pub mod fleet;
pub mod grid;
pub mod placement;
pub mod ship;
pub mod targeting;

// Re-export commonly used types
pub use board::Board;
pub use cellset::{CellSet, CellSetError};
pub use common::{BoardError, GuessResult};
pub use config::*;
pub use fleet::Fleet;
pub use grid::{Cell, Direction, Grid};
pub use placement::PlacementGenerator;
pub use ship::{Orientation, Ship};
pub use targeting::{DirectionSet, TargetingState, TargetingStrategy, Tracker};

//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomaticPlayer, Board, BoardError, Cell, Direction, Fleet, FleetSpec, GameConfig,
    GameReport, GameSession, Grid, GuessResult, PlacementGenerator, Player, RandomPlayer, Ship,
    TargetingState, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::init_logging;

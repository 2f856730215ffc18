//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - RandomPlayer: uniform random shots, never repeating a cell
//! - AutomaticPlayer: hunt/target heuristic driven by hit and sink feedback
//!
//! Human players live outside the engine; they hand the game loop
//! pre-resolved cells instead of implementing this trait.

use rand::rngs::SmallRng;

use crate::engine::grid::Cell;

/// Interface implemented by different automated player types.
///
/// Each turn the game loop asks for a target, attacks the opponent's board
/// with it and reports the outcome back.
pub trait Player: Send {
    /// Choose the next cell to attack. Returns `None` once no untargeted
    /// cell remains.
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Cell>;

    /// Inform the player of the result of its last attack.
    fn receive_result(&mut self, _is_hit: bool, _has_sunk: bool) {}
}

pub mod automatic;
pub mod random;

pub use automatic::AutomaticPlayer;
pub use random::RandomPlayer;

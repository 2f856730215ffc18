use rand::rngs::SmallRng;

use super::Player;
use crate::engine::grid::{Cell, Grid};
use crate::engine::targeting::Tracker;

/// Player that shoots uniformly at random, skipping cells it already tried.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    tracker: Tracker,
}

impl RandomPlayer {
    pub fn new(grid: Grid) -> Self {
        Self {
            tracker: Tracker::new(grid),
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Cell> {
        let cell = self.tracker.random_untargeted(rng)?;
        self.tracker.claim(cell)
    }
}

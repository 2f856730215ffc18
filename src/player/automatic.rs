use rand::rngs::SmallRng;

use super::Player;
use crate::engine::grid::{Cell, Grid};
use crate::engine::targeting::{TargetingState, TargetingStrategy};

/// Player that hunts at random and then works around each hit until the ship
/// sinks.
#[derive(Debug, Clone)]
pub struct AutomaticPlayer {
    strategy: TargetingStrategy,
}

impl AutomaticPlayer {
    pub fn new(grid: Grid) -> Self {
        Self {
            strategy: TargetingStrategy::new(grid),
        }
    }

    pub fn strategy(&self) -> &TargetingStrategy {
        &self.strategy
    }

    pub fn state(&self) -> TargetingState {
        self.strategy.state()
    }
}

impl Player for AutomaticPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Cell> {
        self.strategy.select_target(rng)
    }

    fn receive_result(&mut self, is_hit: bool, has_sunk: bool) {
        self.strategy.receive_result(is_hit, has_sunk);
    }
}

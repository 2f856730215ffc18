//! Random fleet generation by rejection sampling.
//!
//! Each accepted ship stamps its cells and its one-cell halo into an
//! exclusion set, so later candidates can neither overlap nor touch it.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::engine::cellset::CellSet;
use crate::engine::common::BoardError;
use crate::engine::config::{FleetSpec, GameConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::engine::fleet::Fleet;
use crate::engine::grid::{Cell, Grid};
use crate::engine::ship::Ship;

/// Builds fleets that satisfy a [`FleetSpec`] on a given grid.
#[derive(Debug, Clone)]
pub struct PlacementGenerator {
    grid: Grid,
    spec: FleetSpec,
    max_attempts: usize,
}

impl PlacementGenerator {
    pub fn new(grid: Grid, spec: FleetSpec) -> Self {
        PlacementGenerator {
            grid,
            spec,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid, config.fleet.clone())
            .with_max_attempts(config.max_placement_attempts)
    }

    /// Cap on rejected candidates per ship.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn spec(&self) -> &FleetSpec {
        &self.spec
    }

    /// Generate a complete fleet, shortest ships first.
    ///
    /// Fails with [`BoardError::PlacementExhausted`] when a ship cannot be
    /// placed within the attempt cap; nothing is returned in that case.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Fleet, BoardError> {
        let mut forbidden = CellSet::new(self.grid);
        let mut ships = Vec::with_capacity(self.spec.total_ships());
        for (length, count) in self.spec.iter() {
            for _ in 0..count {
                ships.push(self.place_ship(rng, length, &mut forbidden)?);
            }
        }
        debug!(
            "generated fleet of {} ships on {}x{} grid",
            ships.len(),
            self.grid.width(),
            self.grid.height()
        );
        Ok(Fleet::new(ships))
    }

    fn place_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        forbidden: &mut CellSet,
    ) -> Result<Ship, BoardError> {
        for attempt in 1..=self.max_attempts {
            let Some((start, end)) = self.random_span(rng, length) else {
                continue;
            };
            let ship = Ship::new(start, end)?;
            if forbidden.contains_any(ship.cells()) {
                trace!("rejected {:?} (attempt {})", ship, attempt);
                continue;
            }
            forbidden.extend(ship.halo(&self.grid))?;
            debug!("placed {:?} after {} attempt(s)", ship, attempt);
            return Ok(ship);
        }
        Err(BoardError::PlacementExhausted {
            length,
            attempts: self.max_attempts,
        })
    }

    /// Pick a random in-bounds span of `length` cells. Returns `None` when the
    /// drawn orientation cannot hold the ship.
    fn random_span<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Option<(Cell, Cell)> {
        let horizontal: bool = rng.random();
        let (long_extent, short_extent) = if horizontal {
            (self.grid.width(), self.grid.height())
        } else {
            (self.grid.height(), self.grid.width())
        };
        if length > long_extent {
            return None;
        }
        let start = rng.random_range(1..=long_extent - length + 1);
        let across = rng.random_range(1..=short_extent);
        let end = start + length - 1;
        Some(if horizontal {
            (Cell::new(start, across), Cell::new(end, across))
        } else {
            (Cell::new(across, start), Cell::new(across, end))
        })
    }
}

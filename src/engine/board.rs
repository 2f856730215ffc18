//! Board state: one fleet plus the history of cells attacked on it.

use core::fmt;
use log::{info, trace};
use rand::Rng;

use crate::engine::cellset::CellSet;
use crate::engine::common::{BoardError, GuessResult};
use crate::engine::fleet::Fleet;
use crate::engine::grid::{Cell, Grid};
use crate::engine::placement::PlacementGenerator;
use crate::engine::ship::Ship;

/// A validated fleet on a grid, with every attack it has received.
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
    attacked: CellSet,
}

impl Board {
    /// Create a board, rejecting fleets that leave the grid, overlap or touch.
    pub fn new(grid: Grid, fleet: Fleet) -> Result<Self, BoardError> {
        let board = Board {
            grid,
            fleet,
            attacked: CellSet::new(grid),
        };
        board.validate_fleet()?;
        Ok(board)
    }

    /// Create a board with a freshly generated fleet.
    pub fn random<R: Rng + ?Sized>(
        generator: &PlacementGenerator,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let fleet = generator.generate(rng)?;
        Self::new(generator.grid(), fleet)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ships(&self) -> &[Ship] {
        self.fleet.ships()
    }

    /// Cells attacked so far.
    pub fn attacked(&self) -> &CellSet {
        &self.attacked
    }

    /// Resolve an attack on `cell`.
    ///
    /// Repeating an attack is allowed and reports the same outcome again.
    pub fn attack(&mut self, cell: Cell) -> Result<GuessResult, BoardError> {
        if !self.grid.contains(cell) {
            return Err(BoardError::OutOfBounds { cell });
        }
        self.attacked.insert(cell)?;

        let mut result = GuessResult::Miss;
        for ship in self.fleet.ships_mut() {
            if ship.receive_damage(cell) {
                result = GuessResult::from_flags(true, ship.has_sunk());
                if result.has_sunk() {
                    info!("sank {:?} at {}", ship, cell);
                }
            }
        }
        trace!("attack at {} -> {:?}", cell, result);
        Ok(result)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.fleet.iter().all(Ship::has_sunk)
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.iter().filter(|ship| !ship.has_sunk()).count()
    }

    /// Re-check the fleet invariants against this board's grid.
    pub fn validate_fleet(&self) -> Result<(), BoardError> {
        self.fleet.validate(&self.grid)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  grid: {}x{},\n  ships: {:?},\n  attacked: {:?}\n}}",
            self.grid.width(),
            self.grid.height(),
            self.fleet.ships(),
            self.attacked
        )
    }
}

//! Ship geometry and damage tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::common::BoardError;
use crate::engine::grid::{Cell, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight run of cells with the set of cells already hit.
///
/// Endpoints are normalised on construction so that `start` is the top-left
/// end of the ship.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    x_start: usize,
    y_start: usize,
    x_end: usize,
    y_end: usize,
    cells: Vec<Cell>,
    damaged: BTreeSet<Cell>,
}

impl Ship {
    /// Create a ship spanning `start..=end` in either order.
    ///
    /// Fails with [`BoardError::InvalidShape`] unless both endpoints share a
    /// row or a column.
    pub fn new(start: Cell, end: Cell) -> Result<Self, BoardError> {
        let ship = Self::new_unvalidated(start, end);
        if !ship.is_horizontal() && !ship.is_vertical() {
            return Err(BoardError::InvalidShape { start, end });
        }
        Ok(ship)
    }

    /// Create a ship without checking that it is axis aligned.
    ///
    /// A diagonal pair is laid out as the vertical run at the leftmost `x`.
    pub fn new_unvalidated(start: Cell, end: Cell) -> Self {
        let (x_start, x_end) = (start.x.min(end.x), start.x.max(end.x));
        let (y_start, y_end) = (start.y.min(end.y), start.y.max(end.y));
        let cells = if y_start == y_end {
            (x_start..=x_end).map(|x| Cell::new(x, y_start)).collect()
        } else {
            (y_start..=y_end).map(|y| Cell::new(x_start, y)).collect()
        };
        Ship {
            x_start,
            y_start,
            x_end,
            y_end,
            cells,
            damaged: BTreeSet::new(),
        }
    }

    /// Top-left end of the ship.
    pub fn start(&self) -> Cell {
        Cell::new(self.x_start, self.y_start)
    }

    /// Bottom-right end of the ship.
    pub fn end(&self) -> Cell {
        Cell::new(self.x_end, self.y_end)
    }

    pub fn is_horizontal(&self) -> bool {
        self.y_start == self.y_end
    }

    pub fn is_vertical(&self) -> bool {
        self.x_start == self.x_end
    }

    /// Orientation of the ship. A single-cell ship reports `Horizontal`.
    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Cells occupied by the ship, from `start` to `end`.
    pub fn occupied_cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn is_occupying(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Record an attack on `cell`.
    /// Returns `true` if the ship occupies the cell; repeated hits are no-ops.
    pub fn receive_damage(&mut self, cell: Cell) -> bool {
        if !self.is_occupying(cell) {
            return false;
        }
        self.damaged.insert(cell);
        true
    }

    pub fn damaged_cells(&self) -> &BTreeSet<Cell> {
        &self.damaged
    }

    pub fn count_damaged_cells(&self) -> usize {
        self.damaged.len()
    }

    /// Check if the ship is sunk (every occupied cell damaged).
    pub fn has_sunk(&self) -> bool {
        self.cells.iter().all(|cell| self.damaged.contains(cell))
    }

    /// Bounding-box proximity test: `cell` lies within the ship's box grown by
    /// one in every direction.
    pub fn is_near_cell(&self, cell: Cell) -> bool {
        cell.x >= self.x_start.saturating_sub(1)
            && cell.x <= self.x_end.saturating_add(1)
            && cell.y >= self.y_start.saturating_sub(1)
            && cell.y <= self.y_end.saturating_add(1)
    }

    /// Whether any cell of `other` is near this ship.
    pub fn is_near_ship(&self, other: &Ship) -> bool {
        other.cells().any(|cell| self.is_near_cell(cell))
    }

    /// Whether the two ships share a cell.
    pub fn overlaps(&self, other: &Ship) -> bool {
        other.cells().any(|cell| self.is_occupying(cell))
    }

    /// Whether every occupied cell lies on `grid`.
    pub fn fits(&self, grid: &Grid) -> bool {
        grid.contains(self.start()) && grid.contains(self.end())
    }

    /// The ship's bounding box grown by one cell on every side, clipped to
    /// `grid`. Includes the ship's own cells.
    pub fn halo(&self, grid: &Grid) -> impl Iterator<Item = Cell> {
        grid.clip(
            self.x_start.saturating_sub(1),
            self.y_start.saturating_sub(1),
            self.x_end.saturating_add(1),
            self.y_end.saturating_add(1),
        )
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, end: {}, orientation: {:?}, damaged: {}/{} }}",
            self.start(),
            self.end(),
            self.orientation(),
            self.damaged.len(),
            self.cells.len(),
        )
    }
}

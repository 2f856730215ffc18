//! A player's collection of ships and the placement invariants they obey.

use alloc::vec::Vec;
use core::slice;

use crate::engine::common::BoardError;
use crate::engine::grid::Grid;
use crate::engine::ship::Ship;

/// The ships belonging to one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(ships: Vec<Ship>) -> Self {
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Total number of cells occupied by the fleet.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// Check that every ship lies on `grid` and that no two ships overlap or
    /// touch, diagonals included.
    pub fn validate(&self, grid: &Grid) -> Result<(), BoardError> {
        if let Some(index) = self.ships.iter().position(|ship| !ship.fits(grid)) {
            return Err(BoardError::ShipOutOfBounds { index });
        }
        for (first, a) in self.ships.iter().enumerate() {
            for (offset, b) in self.ships[first + 1..].iter().enumerate() {
                let second = first + 1 + offset;
                if a.overlaps(b) {
                    return Err(BoardError::Overlap { first, second });
                }
                if a.is_near_ship(b) {
                    return Err(BoardError::Adjacency { first, second });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Ship> for Fleet {
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        Fleet::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = slice::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

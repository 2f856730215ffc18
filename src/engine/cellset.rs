//! A grid-sized bitset of cells.
//!
//! Cells are packed row-major into `u64` words, one bit per cell, with the
//! word count fixed by the [`Grid`] the set is created for. This backs the
//! attack history, the attacker's tracker and the placement exclusion set.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::grid::{Cell, Grid};

const WORD_BITS: usize = u64::BITS as usize;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Cell lies outside the grid the set was sized for.
    OutOfGrid { x: usize, y: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::OutOfGrid { x, y } => {
                write!(f, "OutOfGrid: x={}, y={}", x, y)
            }
        }
    }
}

/// Set of cells on a fixed grid.
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet {
    grid: Grid,
    words: Vec<u64>,
    len: usize,
}

impl CellSet {
    /// Create an empty set sized for `grid`.
    pub fn new(grid: Grid) -> Self {
        CellSet {
            grid,
            words: vec![0; grid.area().div_ceil(WORD_BITS)],
            len: 0,
        }
    }

    /// Build a set from an iterator of cells, failing on the first cell
    /// outside `grid`.
    pub fn from_cells<I>(grid: Grid, cells: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::new(grid);
        set.extend(cells)?;
        Ok(set)
    }

    /// Grid this set is sized for.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Membership test. Cells outside the grid are never members.
    pub fn contains(&self, cell: Cell) -> bool {
        match self.index(cell) {
            Ok(idx) => (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1,
            Err(_) => false,
        }
    }

    /// Add `cell`, returning `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> Result<bool, CellSetError> {
        let idx = self.index(cell)?;
        let word = &mut self.words[idx / WORD_BITS];
        let bit = 1u64 << (idx % WORD_BITS);
        if *word & bit != 0 {
            return Ok(false);
        }
        *word |= bit;
        self.len += 1;
        Ok(true)
    }

    /// Add every cell from `cells`.
    pub fn extend<I>(&mut self, cells: I) -> Result<(), CellSetError>
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.insert(cell)?;
        }
        Ok(())
    }

    /// Whether any of `cells` is already in the set.
    pub fn contains_any<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Cell>,
    {
        cells.into_iter().any(|cell| self.contains(cell))
    }

    /// Iterator over member cells in row-major order.
    pub fn iter(&self) -> Cells<'_> {
        Cells { set: self, idx: 0 }
    }

    #[inline]
    fn index(&self, cell: Cell) -> Result<usize, CellSetError> {
        if !self.grid.contains(cell) {
            return Err(CellSetError::OutOfGrid {
                x: cell.x,
                y: cell.y,
            });
        }
        Ok((cell.y - 1) * self.grid.width() + (cell.x - 1))
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CellSet<{}x{}> ({} cells):",
            self.grid.width(),
            self.grid.height(),
            self.len
        )?;
        for y in 1..=self.grid.height() {
            for x in 1..=self.grid.width() {
                let mark = if self.contains(Cell::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellSet`].
pub struct Cells<'a> {
    set: &'a CellSet,
    idx: usize,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.set.grid.width();
        while self.idx < self.set.grid.area() {
            let idx = self.idx;
            self.idx += 1;
            if (self.set.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1 {
                return Some(Cell::new(idx % width + 1, idx / width + 1));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

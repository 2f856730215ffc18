//! Grid geometry: 1-indexed cells, probing directions and grid bounds.

use core::fmt;

use crate::engine::common::BoardError;
use crate::engine::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_CELLS};

/// One `(x, y)` position on the grid. Both axes start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a cell from its column (`x`) and row (`y`).
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    ///
    /// Returns `None` when the step would leave the positive quadrant. The
    /// result may still lie outside a particular [`Grid`].
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        Some(Cell {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis direction used when probing around a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed order in which directions are tried around an anchor.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Direction pointing the other way along the same axis.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// `(dx, dy)` offset of a single step. `Up` decreases `y`.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Rectangular playing area spanning `1..=width` by `1..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid. Both dimensions must be non-zero and the area must not
    /// exceed [`MAX_GRID_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        match width.checked_mul(height) {
            Some(area) if area > 0 && area <= MAX_GRID_CELLS => Ok(Grid { width, height }),
            _ => Err(BoardError::InvalidGrid { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the grid.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether `cell` lies within the grid bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (1..=height).flat_map(move |y| (1..=width).map(move |x| Cell::new(x, y)))
    }

    /// Cells of the inclusive box `(min_x, min_y)..=(max_x, max_y)` that fall
    /// inside the grid.
    pub fn clip(
        &self,
        min_x: usize,
        min_y: usize,
        max_x: usize,
        max_y: usize,
    ) -> impl Iterator<Item = Cell> {
        let (x0, x1) = (min_x.max(1), max_x.min(self.width));
        let (y0, y1) = (min_y.max(1), max_y.min(self.height));
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

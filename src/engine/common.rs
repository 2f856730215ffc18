//! Common types for the rules engine: attack results and engine errors.

use core::fmt;

use crate::engine::cellset::CellSetError;
use crate::engine::config::MAX_GRID_CELLS;
use crate::engine::grid::Cell;

/// Result of attacking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// No ship occupies the cell.
    Miss,
    /// A ship was hit but still has undamaged cells.
    Hit,
    /// A ship was hit and every one of its cells is now damaged.
    Sink,
}

impl GuessResult {
    /// Build a result from the `(is_hit, has_sunk)` pair reported by a ship.
    pub fn from_flags(is_hit: bool, has_sunk: bool) -> Self {
        match (is_hit, has_sunk) {
            (true, true) => GuessResult::Sink,
            (true, false) => GuessResult::Hit,
            (false, _) => GuessResult::Miss,
        }
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    pub fn has_sunk(self) -> bool {
        matches!(self, GuessResult::Sink)
    }
}

impl From<GuessResult> for (bool, bool) {
    fn from(result: GuessResult) -> Self {
        (result.is_hit(), result.has_sunk())
    }
}

/// Errors returned by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell set error.
    CellSet(CellSetError),
    /// Ship endpoints are neither in one row nor in one column.
    InvalidShape { start: Cell, end: Cell },
    /// Attacked cell lies outside the grid.
    OutOfBounds { cell: Cell },
    /// Ship at `index` in the fleet extends past the grid.
    ShipOutOfBounds { index: usize },
    /// Two ships share at least one cell.
    Overlap { first: usize, second: usize },
    /// Two ships touch, diagonals included.
    Adjacency { first: usize, second: usize },
    /// Placement gave up on a ship after `attempts` rejected candidates.
    PlacementExhausted { length: usize, attempts: usize },
    /// Fleet specification entry with a zero length or count.
    InvalidFleetSpec { length: usize, count: usize },
    /// Fleet specification text could not be parsed.
    MalformedFleetSpec,
    /// Grid with a zero dimension.
    InvalidGrid { width: usize, height: usize },
    /// Attacker has already targeted every cell of the grid.
    TargetsExhausted,
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::CellSet(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CellSet(e) => write!(f, "Cell set error: {}", e),
            BoardError::InvalidShape { start, end } => write!(
                f,
                "Ship from {} to {} is neither horizontal nor vertical",
                start, end
            ),
            BoardError::OutOfBounds { cell } => write!(f, "Cell {} is outside the grid", cell),
            BoardError::ShipOutOfBounds { index } => {
                write!(f, "Ship #{} extends outside the grid", index)
            }
            BoardError::Overlap { first, second } => {
                write!(f, "Ships #{} and #{} overlap", first, second)
            }
            BoardError::Adjacency { first, second } => {
                write!(f, "Ships #{} and #{} are adjacent", first, second)
            }
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::InvalidFleetSpec { length, count } => write!(
                f,
                "Invalid fleet entry: {} ship(s) of length {}",
                count, length
            ),
            BoardError::MalformedFleetSpec => {
                write!(f, "Fleet must be given as length:count pairs, e.g. 5:1,4:1")
            }
            BoardError::InvalidGrid { width, height } => {
                write!(
                    f,
                    "Grid {}x{} must be non-empty and span at most {} cells",
                    width, height, MAX_GRID_CELLS
                )
            }
            BoardError::TargetsExhausted => write!(f, "Every cell has already been targeted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

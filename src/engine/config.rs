//! Game configuration: grid size, fleet composition and placement limits.

use alloc::collections::BTreeMap;
use core::fmt;
use core::str::FromStr;

use crate::engine::common::BoardError;
use crate::engine::grid::Grid;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Standard fleet: one ship of each length from 1 to 5, as `(length, count)`.
pub const DEFAULT_FLEET: [(usize, usize); 5] = [(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)];

/// Largest number of cells a grid may span.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Rejected candidates allowed per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// How many ships of each length a fleet must contain.
///
/// Lengths are iterated in ascending order so seeded generation is
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSpec {
    counts: BTreeMap<usize, usize>,
}

impl FleetSpec {
    /// An empty specification.
    pub fn empty() -> Self {
        FleetSpec {
            counts: BTreeMap::new(),
        }
    }

    /// Require `count` more ships of `length`.
    pub fn insert(&mut self, length: usize, count: usize) -> Result<(), BoardError> {
        if length == 0 || count == 0 {
            return Err(BoardError::InvalidFleetSpec { length, count });
        }
        *self.counts.entry(length).or_insert(0) += count;
        Ok(())
    }

    /// Build a specification from `(length, count)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut spec = Self::empty();
        for (length, count) in pairs {
            spec.insert(length, count)?;
        }
        Ok(spec)
    }

    /// `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }

    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_ships(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn total_cells(&self) -> usize {
        self.counts.iter().map(|(length, count)| length * count).sum()
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        let mut spec = Self::empty();
        for (length, count) in DEFAULT_FLEET {
            *spec.counts.entry(length).or_insert(0) += count;
        }
        spec
    }
}

/// Parses `"5:1,4:1,3:2"` style `length:count` lists.
impl FromStr for FleetSpec {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut spec = Self::empty();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (length, count) = entry
                .split_once(':')
                .ok_or(BoardError::MalformedFleetSpec)?;
            let length = length
                .trim()
                .parse()
                .map_err(|_| BoardError::MalformedFleetSpec)?;
            let count = count
                .trim()
                .parse()
                .map_err(|_| BoardError::MalformedFleetSpec)?;
            spec.insert(length, count)?;
        }
        if spec.is_empty() {
            return Err(BoardError::MalformedFleetSpec);
        }
        Ok(spec)
    }
}

impl fmt::Display for FleetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (length, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", length, count)?;
        }
        Ok(())
    }
}

/// Settings shared by every board in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub fleet: FleetSpec,
    pub max_placement_attempts: usize,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, fleet: FleetSpec) -> Result<Self, BoardError> {
        Ok(GameConfig {
            grid: Grid::new(width, height)?,
            fleet,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: Grid::default(),
            fleet: FleetSpec::default(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

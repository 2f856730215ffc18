//! Hunt/target heuristic for the automated attacker.
//!
//! The strategy searches at random until it scores a hit, then probes the
//! axis neighbours of that first hit (the anchor) in the fixed order
//! left, right, up, down. A hit keeps it stepping in the same direction; when
//! the line runs out it reverses from the anchor. A miss rules the current
//! direction out. Once the ship sinks, or every direction from the anchor is
//! ruled out, it goes back to random search.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::engine::cellset::CellSet;
use crate::engine::grid::{Cell, Direction, Grid};

/// Set of probing directions ruled out around the current anchor.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn new() -> Self {
        DirectionSet(0)
    }

    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Up => 0b0100,
            Direction::Down => 0b1000,
        }
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= Self::bit(direction);
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in probing priority order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Cells an attacker has already chosen.
#[derive(Debug, Clone)]
pub struct Tracker {
    targeted: CellSet,
}

impl Tracker {
    pub fn new(grid: Grid) -> Self {
        Tracker {
            targeted: CellSet::new(grid),
        }
    }

    pub fn grid(&self) -> Grid {
        self.targeted.grid()
    }

    /// A cell may be attacked if it is on the grid and not yet targeted.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.targeted.grid().contains(cell) && !self.targeted.contains(cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.targeted.contains(cell)
    }

    /// Record `cell` as targeted. Returns `None`, recording nothing, if the
    /// cell is not valid.
    pub fn claim(&mut self, cell: Cell) -> Option<Cell> {
        if !self.is_valid(cell) {
            return None;
        }
        self.targeted.insert(cell).ok()?;
        Some(cell)
    }

    /// Uniformly random untargeted cell, without claiming it.
    pub fn random_untargeted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let open: Vec<Cell> = self
            .grid()
            .cells()
            .filter(|cell| !self.targeted.contains(*cell))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }

    /// Number of cells targeted so far.
    pub fn len(&self) -> usize {
        self.targeted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targeted.is_empty()
    }

    pub fn cells(&self) -> &CellSet {
        &self.targeted
    }
}

/// Where the strategy stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingState {
    /// No damaged ship is being pursued; shots are random.
    Hunting,
    /// Closing in on the ship first hit at `anchor`.
    Probing {
        anchor: Cell,
        /// Direction of the pending or last successful probe.
        direction: Option<Direction>,
        exhausted: DirectionSet,
    },
}

/// Stateful hunt/target attacker.
#[derive(Debug, Clone)]
pub struct TargetingStrategy {
    tracker: Tracker,
    state: TargetingState,
    last_target: Option<Cell>,
}

impl TargetingStrategy {
    pub fn new(grid: Grid) -> Self {
        TargetingStrategy {
            tracker: Tracker::new(grid),
            state: TargetingState::Hunting,
            last_target: None,
        }
    }

    pub fn state(&self) -> TargetingState {
        self.state
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Cell returned by the most recent selection.
    pub fn last_target(&self) -> Option<Cell> {
        self.last_target
    }

    /// Choose and claim the next cell to attack.
    ///
    /// Returns `None` only once every cell of the grid has been targeted.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        let cell = match self.probe() {
            Some(cell) => cell,
            None => self.tracker.random_untargeted(rng)?,
        };
        self.commit(cell)
    }

    /// Aim the next shot at `cell` instead of choosing one.
    ///
    /// The shot is claimed and its result is interpreted exactly as for a
    /// selected cell. Returns `None` if the cell is off the grid or already
    /// targeted.
    pub fn target(&mut self, cell: Cell) -> Option<Cell> {
        self.commit(cell)
    }

    /// Feed back the outcome of the last shot.
    pub fn receive_result(&mut self, is_hit: bool, has_sunk: bool) {
        let Some(last) = self.last_target else {
            return;
        };
        if has_sunk {
            if let TargetingState::Probing { anchor, .. } = self.state {
                debug!("ship anchored at {} sunk at {}; hunting", anchor, last);
            }
            self.state = TargetingState::Hunting;
            return;
        }
        if let TargetingState::Probing {
            direction,
            exhausted,
            ..
        } = &mut self.state
        {
            if !is_hit {
                if let Some(missed) = direction.take() {
                    exhausted.insert(missed);
                }
            }
        } else if is_hit {
            debug!("hit at {}; probing around it", last);
            self.state = TargetingState::Probing {
                anchor: last,
                direction: None,
                exhausted: DirectionSet::new(),
            };
        }
    }

    fn commit(&mut self, cell: Cell) -> Option<Cell> {
        let cell = self.tracker.claim(cell)?;
        self.last_target = Some(cell);
        Some(cell)
    }

    /// Next probing cell around the anchor, updating direction bookkeeping.
    /// Falls back to `Hunting` when no direction is left.
    fn probe(&mut self) -> Option<Cell> {
        let TargetingState::Probing {
            anchor,
            direction,
            mut exhausted,
        } = self.state
        else {
            return None;
        };

        if let Some(current) = direction {
            let ahead = self.last_target.and_then(|cell| cell.step(current));
            if let Some(cell) = ahead.filter(|cell| self.tracker.is_valid(*cell)) {
                return Some(cell);
            }
            exhausted.insert(current);
            let reverse = current.opposite();
            if !exhausted.contains(reverse) {
                if let Some(cell) = self.open_neighbour(anchor, reverse) {
                    debug!("{} blocked; reversing {} from {}", current, reverse, anchor);
                    self.state = TargetingState::Probing {
                        anchor,
                        direction: Some(reverse),
                        exhausted,
                    };
                    return Some(cell);
                }
            }
        }

        for candidate in Direction::PRIORITY {
            if exhausted.contains(candidate) {
                continue;
            }
            if let Some(cell) = self.open_neighbour(anchor, candidate) {
                self.state = TargetingState::Probing {
                    anchor,
                    direction: Some(candidate),
                    exhausted,
                };
                return Some(cell);
            }
        }

        debug!("no direction left around {}; dropping it and hunting", anchor);
        self.state = TargetingState::Hunting;
        None
    }

    fn open_neighbour(&self, anchor: Cell, direction: Direction) -> Option<Cell> {
        anchor
            .step(direction)
            .filter(|cell| self.tracker.is_valid(*cell))
    }
}

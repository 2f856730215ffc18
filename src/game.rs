//! Turn-by-turn orchestration of two automated players.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::engine::{Board, BoardError, GameConfig, GuessResult, PlacementGenerator};
use crate::player::Player;

/// Current status of a game from one contestant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A named player seated at its own board.
pub struct Contestant {
    name: String,
    board: Board,
    player: Box<dyn Player>,
    shots: usize,
    hits: usize,
}

impl Contestant {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contestant's own board, attacked by the opponent.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn has_lost(&self) -> bool {
        self.board.all_ships_sunk()
    }

    fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            shots: self.shots,
            hits: self.hits,
            ships_remaining: self.board.ships_remaining(),
        }
    }
}

/// Per-player statistics of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub name: String,
    pub shots: usize,
    pub hits: usize,
    pub ships_remaining: usize,
}

/// Outcome of [`GameSession::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub winner: String,
    /// Attacks made by both players together.
    pub turns: usize,
    pub players: Vec<PlayerSummary>,
}

/// Owns the game settings and the counter used to name players.
pub struct GameSession {
    config: GameConfig,
    generator: PlacementGenerator,
    players_seated: usize,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let generator = PlacementGenerator::from_config(&config);
        Self {
            config,
            generator,
            players_seated: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of contestants created by this session so far.
    pub fn players_seated(&self) -> usize {
        self.players_seated
    }

    /// Seat `player` at a freshly generated board.
    ///
    /// Unnamed players are called "Player N" after the session's counter.
    pub fn seat(
        &mut self,
        name: Option<&str>,
        player: Box<dyn Player>,
        rng: &mut SmallRng,
    ) -> Result<Contestant, BoardError> {
        let board = Board::random(&self.generator, rng)?;
        self.players_seated += 1;
        let name = match name {
            Some(name) => String::from(name),
            None => format!("Player {}", self.players_seated),
        };
        debug!("seated {} with {} ships", name, board.ships().len());
        Ok(Contestant {
            name,
            board,
            player,
            shots: 0,
            hits: 0,
        })
    }

    /// Alternate attacks, `first` opening, until one fleet is sunk.
    pub fn play(
        &self,
        first: &mut Contestant,
        second: &mut Contestant,
        rng: &mut SmallRng,
    ) -> Result<GameReport, BoardError> {
        let mut turns = 0;
        let winner = loop {
            turns += 1;
            if Self::volley(first, second, rng)? {
                break first.name.clone();
            }
            turns += 1;
            if Self::volley(second, first, rng)? {
                break second.name.clone();
            }
        };
        info!("{} wins after {} turns", winner, turns);
        Ok(GameReport {
            winner,
            turns,
            players: vec![first.summary(), second.summary()],
        })
    }

    /// Status of `contestant` against `opponent`.
    pub fn status(contestant: &Contestant, opponent: &Contestant) -> GameStatus {
        if contestant.has_lost() {
            GameStatus::Lost
        } else if opponent.has_lost() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// One attack by `attacker` on `defender`. Returns `true` when the
    /// defender's fleet is gone.
    fn volley(
        attacker: &mut Contestant,
        defender: &mut Contestant,
        rng: &mut SmallRng,
    ) -> Result<bool, BoardError> {
        let cell = attacker
            .player
            .select_target(rng)
            .ok_or(BoardError::TargetsExhausted)?;
        let result = defender.board.attack(cell)?;
        attacker.shots += 1;
        if result != GuessResult::Miss {
            attacker.hits += 1;
        }
        attacker
            .player
            .receive_result(result.is_hit(), result.has_sunk());
        Ok(defender.board.all_ships_sunk())
    }
}

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};

use crate::{
    bottle::Bottle,
    common::{GameError, TableError},
    config::{round_bonus, GameConfig, HELP_COST, MIN_CAPACITY, MIN_SYMBOLS},
    filling::Filling,
    table::Table,
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    RoundFinished,
}

/// Serializable snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub score: i64,
    pub moves: u32,
    pub status: GameStatus,
    pub capacity: usize,
    /// Each bottle's contents, base first.
    pub bottles: Vec<Vec<Filling>>,
}

/// Fewer colours or a smaller capacity deal tables that are always solved.
fn check_playable(symbols: usize, capacity: usize) -> Result<(), GameError> {
    if symbols < MIN_SYMBOLS || capacity < MIN_CAPACITY {
        return Err(GameError::InvalidConfig { symbols, capacity });
    }
    Ok(())
}

/// One round at a time of water sort: a table plus score and move count.
#[derive(Debug, Clone)]
pub struct Game {
    table: Table,
    score: i64,
    moves: u32,
}

impl Game {
    /// Deal a new game, re-dealing until the first round is not already solved.
    pub fn new(
        symbols: &[Filling],
        used_symbols: usize,
        seed: u64,
        capacity: usize,
    ) -> Result<Self, GameError> {
        Self::with_score(symbols, used_symbols, seed, capacity, 0)
    }

    /// Like [`Game::new`], carrying over an existing score.
    pub fn with_score(
        symbols: &[Filling],
        used_symbols: usize,
        seed: u64,
        capacity: usize,
        score: i64,
    ) -> Result<Self, GameError> {
        let used = used_symbols.min(symbols.len());
        check_playable(used, capacity)?;
        let mut game = Self {
            table: Table::new(symbols, used, seed, capacity),
            score,
            moves: 0,
        };
        if game.is_round_finished() {
            game.start_new_round();
        }
        info!("New game: {} colours, capacity {}, seed {}", used, capacity, seed);
        Ok(game)
    }

    /// Build a game from a [`GameConfig`] over all known fillings.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        Self::with_score(
            &Filling::ALL,
            config.symbols,
            config.seed,
            config.capacity,
            config.initial_score,
        )
    }

    /// Play on a table as given, without re-dealing.
    ///
    /// The table must use at least [`MIN_SYMBOLS`] colours and a capacity of
    /// at least [`MIN_CAPACITY`], as later rounds are dealt from it.
    pub fn from_table(table: Table, score: i64) -> Result<Self, GameError> {
        check_playable(table.symbols().len(), table.bottle_capacity())?;
        Ok(Self {
            table,
            score,
            moves: 0,
        })
    }

    /// An empty bottle sized for this table. Does not touch the table.
    pub fn new_bottle(&self) -> Bottle {
        Bottle::new(self.table.bottle_capacity())
    }

    /// Pour the whole matching run from bottle `i` onto bottle `j`.
    ///
    /// Invalid pairs are ignored and yield `Ok(false)`. A valid move counts
    /// as one move however many units it transfers. Pouring from an empty
    /// bottle into an empty bottle passes [`Game::is_valid`] but fails with
    /// [`TableError::EmptyBottle`], leaving the game untouched.
    pub fn play(&mut self, i: usize, j: usize) -> Result<bool, TableError> {
        if !self.is_valid(i, j) {
            debug!("Rejected move {} -> {}", i, j);
            return Ok(false);
        }
        let mut poured = 0;
        while self.is_valid(i, j) {
            if !self.table.pour_from_to(i, j)? {
                break;
            }
            poured += 1;
        }
        self.moves += 1;
        debug!("Move {}: {} -> {} ({} units)", self.moves, i, j, poured);
        self.update_score();
        Ok(true)
    }

    /// `true` when the round is solved.
    pub fn is_round_finished(&self) -> bool {
        self.table.are_all_filled()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_round_finished() {
            GameStatus::RoundFinished
        } else {
            GameStatus::InProgress
        }
    }

    /// Deal a fresh, unsolved round. The score carries over.
    pub fn start_new_round(&mut self) {
        self.moves = 0;
        loop {
            self.table.regenerate_table();
            if !self.is_round_finished() {
                break;
            }
        }
        info!("New round with {} bottles", self.table.number_of_bottles());
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Moves made this round.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn number_of_bottles(&self) -> usize {
        self.table.number_of_bottles()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Whether pouring from `i` to `j` is allowed.
    ///
    /// Both indices must exist and differ, and `j` must be empty or share
    /// its top colour with a non-empty `i`.
    pub fn is_valid(&self, i: usize, j: usize) -> bool {
        let len = self.number_of_bottles();
        if i == j || i >= len || j >= len {
            return false;
        }
        let (source, target) = (&self.table.bottles()[i], &self.table.bottles()[j]);
        match (source.top(), target.top()) {
            (_, Err(_)) => true,
            (Ok(from), Ok(to)) => from == to,
            (Err(_), Ok(_)) => false,
        }
    }

    /// Add an empty bottle in exchange for [`HELP_COST`] points.
    ///
    /// The score is not checked; callers decide whether help is affordable.
    pub fn provide_help(&mut self) {
        let bottle = self.new_bottle();
        self.table.add_bottle(bottle);
        self.score -= HELP_COST;
        info!(
            "Help bought: {} bottles, score {}",
            self.table.number_of_bottles(),
            self.score
        );
    }

    /// Award the round bonus if the round is finished.
    ///
    /// Calling this again on a finished round awards the bonus again.
    pub fn update_score(&mut self) {
        if self.is_round_finished() {
            let bonus = round_bonus(self.moves);
            self.score += bonus;
            info!("Round finished in {} moves, bonus {}", self.moves, bonus);
        }
    }

    /// Serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            score: self.score,
            moves: self.moves,
            status: self.status(),
            capacity: self.table.bottle_capacity(),
            bottles: self.table.bottles().iter().map(Bottle::content).collect(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "{}", self.table)?;
        match self.status() {
            GameStatus::InProgress => {
                writeln!(f, "Status: The round is not finished.")?;
                writeln!(f, "{} moves have been used until now.", self.moves)
            }
            GameStatus::RoundFinished => {
                writeln!(f, "Status: This round is finished.")?;
                writeln!(f, "{} moves were used.", self.moves)
            }
        }
    }
}

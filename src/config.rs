use crate::filling::Filling;

/// Number of permanently empty bottles added on top of one bottle per colour.
pub const DIFFICULTY_SLACK: usize = 3;
/// Bottle capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 5;
/// Seed used by the terminal game when none is given.
pub const DEFAULT_SEED: u64 = 1;
/// Points deducted for an extra bottle.
pub const HELP_COST: i64 = 100;

pub const MIN_SYMBOLS: usize = 2;
pub const MAX_SYMBOLS: usize = Filling::ALL.len();
pub const MIN_CAPACITY: usize = 2;
pub const MAX_CAPACITY: usize = 8;

/// Glyph drawn for an unfilled slot.
pub const EMPTY: &str = "⬜";

/// Round bonus buckets: `(max moves, bonus)`, checked in order.
pub const SCORE_BUCKETS: [(u32, i64); 3] = [(10, 1000), (15, 500), (25, 200)];

/// Bonus awarded for finishing a round in `moves` moves.
pub fn round_bonus(moves: u32) -> i64 {
    SCORE_BUCKETS
        .iter()
        .find(|(max, _)| moves <= *max)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Parameters needed to build a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Requested number of colours; clamped to the available fillings.
    pub symbols: usize,
    pub capacity: usize,
    pub seed: u64,
    pub initial_score: i64,
}

impl GameConfig {
    pub const fn new(symbols: usize, capacity: usize, seed: u64) -> Self {
        Self {
            symbols,
            capacity,
            seed,
            initial_score: 0,
        }
    }

    pub const fn with_score(mut self, score: i64) -> Self {
        self.initial_score = score;
        self
    }

    /// Clamp symbol count and capacity into the playable range.
    pub fn clamped(self) -> Self {
        Self {
            symbols: self.symbols.clamp(MIN_SYMBOLS, MAX_SYMBOLS),
            capacity: self.capacity.clamp(MIN_CAPACITY, MAX_CAPACITY),
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_SYMBOLS, DEFAULT_CAPACITY, DEFAULT_SEED)
    }
}

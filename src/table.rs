//! The row of bottles in play, and how a fresh round is dealt.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bottle::Bottle;
use crate::common::TableError;
use crate::config::{DIFFICULTY_SLACK, EMPTY};
use crate::filling::Filling;

/// Ordered, index-addressable collection of bottles sharing one capacity.
#[derive(Debug, Clone)]
pub struct Table {
    bottles: Vec<Bottle>,
    symbols: Vec<Filling>,
    capacity: usize,
    rng: SmallRng,
}

impl Table {
    /// Deal a table using the first `used_symbols` of `symbols`.
    ///
    /// The table holds one bottle per colour plus [`DIFFICULTY_SLACK`]
    /// empty ones.
    pub fn new(symbols: &[Filling], used_symbols: usize, seed: u64, capacity: usize) -> Self {
        let used = used_symbols.min(symbols.len());
        let mut table = Self {
            bottles: Vec::with_capacity(used + DIFFICULTY_SLACK),
            symbols: symbols[..used].to_vec(),
            capacity,
            rng: SmallRng::seed_from_u64(seed),
        };
        table.regenerate_table();
        table
    }

    /// Wrap pre-built bottles, e.g. a hand-made puzzle.
    ///
    /// The colours in use are those found in the bottles, in order of first
    /// appearance. Every bottle must have `capacity`.
    pub fn from_bottles(bottles: Vec<Bottle>, capacity: usize, seed: u64) -> Result<Self, TableError> {
        let mut symbols = Vec::new();
        for bottle in &bottles {
            if bottle.capacity() != capacity {
                return Err(TableError::CapacityMismatch {
                    expected: capacity,
                    found: bottle.capacity(),
                });
            }
            for filling in bottle.content() {
                if !symbols.contains(&filling) {
                    symbols.push(filling);
                }
            }
        }
        Ok(Self {
            bottles,
            symbols,
            capacity,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Refill every bottle for a new round.
    ///
    /// Each colour lands exactly `capacity` times across the first
    /// `symbols.len()` bottles; the trailing [`DIFFICULTY_SLACK`] bottles are
    /// empty. Helper bottles added since the last deal are dropped.
    pub fn regenerate_table(&mut self) {
        let mut placed = alloc::vec![0usize; self.symbols.len()];
        self.bottles.clear();
        for _ in 0..self.symbols.len() {
            let mut slots = alloc::vec![None; self.capacity];
            for slot in slots.iter_mut().rev() {
                let index = loop {
                    let candidate = self.rng.random_range(0..self.symbols.len());
                    if placed[candidate] < self.capacity {
                        break candidate;
                    }
                    trace!("Colour {} already used up, drawing again", candidate);
                };
                placed[index] += 1;
                *slot = Some(self.symbols[index]);
            }
            self.bottles.push(Bottle::from_slots(&slots));
        }
        for _ in 0..DIFFICULTY_SLACK {
            self.bottles.push(Bottle::new(self.capacity));
        }
        debug!(
            "Dealt {} bottles of capacity {} with {} colours",
            self.bottles.len(),
            self.capacity,
            self.symbols.len()
        );
    }

    fn bottle_at(&self, i: usize) -> Result<&Bottle, TableError> {
        self.bottles.get(i).ok_or(TableError::IndexOutOfRange {
            index: i,
            len: self.bottles.len(),
        })
    }

    /// Move a single unit from bottle `i` to bottle `j`.
    ///
    /// Returns `Ok(false)` without changing anything when `j` refuses the
    /// unit or is `i` itself. Fails if either index is out of range or `i` is empty.
    pub fn pour_from_to(&mut self, i: usize, j: usize) -> Result<bool, TableError> {
        let filling = self.top(i)?;
        if i == j {
            return Ok(false);
        }
        let len = self.bottles.len();
        let receiver = self
            .bottles
            .get_mut(j)
            .ok_or(TableError::IndexOutOfRange { index: j, len })?;
        if !receiver.receive(filling) {
            return Ok(false);
        }
        self.bottles[i].pour_out();
        trace!("Poured {:?} from {} to {}", filling, i, j);
        Ok(true)
    }

    /// Append a bottle after the existing ones.
    pub fn add_bottle(&mut self, bottle: Bottle) {
        self.bottles.push(bottle);
    }

    /// `true` when every bottle is empty, or full of a single colour.
    pub fn are_all_filled(&self) -> bool {
        self.bottles
            .iter()
            .all(|b| b.is_empty() || (b.is_full() && b.is_single_filling()))
    }

    pub fn top(&self, i: usize) -> Result<Filling, TableError> {
        self.bottle_at(i)?
            .top()
            .map_err(|_| TableError::EmptyBottle { index: i })
    }

    pub fn is_empty(&self, i: usize) -> Result<bool, TableError> {
        Ok(self.bottle_at(i)?.is_empty())
    }

    pub fn is_full(&self, i: usize) -> Result<bool, TableError> {
        Ok(self.bottle_at(i)?.is_full())
    }

    pub fn single_filling(&self, i: usize) -> Result<bool, TableError> {
        Ok(self.bottle_at(i)?.is_single_filling())
    }

    /// Capacity shared by every bottle.
    pub fn bottle_capacity(&self) -> usize {
        self.capacity
    }

    pub fn number_of_bottles(&self) -> usize {
        self.bottles.len()
    }

    /// Colours dealt each round.
    pub fn symbols(&self) -> &[Filling] {
        &self.symbols
    }

    pub fn bottles(&self) -> &[Bottle] {
        &self.bottles
    }

    pub fn bottle(&self, i: usize) -> Option<&Bottle> {
        self.bottles.get(i)
    }
}

impl fmt::Display for Table {
    /// One row per level, top level first, one column per bottle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.capacity).rev() {
            for bottle in &self.bottles {
                match bottle.get(level) {
                    Some(filling) => write!(f, "{}    ", filling)?,
                    None => write!(f, "{}    ", EMPTY)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

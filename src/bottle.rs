//! A single fixed-capacity bottle of stacked fillings.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BottleError;
use crate::config::{DEFAULT_CAPACITY, EMPTY};
use crate::filling::Filling;

/// Last-in-first-out stack of fillings that never exceeds its capacity.
///
/// `contents[0]` is the base, the last element is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Bottle {
    contents: Vec<Filling>,
    capacity: usize,
}

impl Bottle {
    /// Create an empty bottle holding at most `capacity` units.
    pub fn new(capacity: usize) -> Self {
        Self {
            contents: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a bottle from a slot array whose length is the capacity.
    ///
    /// Slot 0 is the topmost slot; `None` marks unfilled space.
    pub fn from_slots(slots: &[Option<Filling>]) -> Self {
        let mut bottle = Self::new(slots.len());
        bottle
            .contents
            .extend(slots.iter().rev().filter_map(|slot| *slot));
        bottle
    }

    /// Build a full or partly full bottle from fillings listed base first.
    ///
    /// The stacking rule is not applied, so mixed bottles can be set up.
    /// Fillings beyond `capacity` are dropped.
    pub fn with_contents(capacity: usize, base_to_top: &[Filling]) -> Self {
        let mut bottle = Self::new(capacity);
        bottle
            .contents
            .extend(base_to_top.iter().copied().take(capacity));
        bottle
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of units currently held.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_full(&self) -> bool {
        self.contents.len() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Topmost filling, or `BottleError::Empty`.
    pub fn top(&self) -> Result<Filling, BottleError> {
        self.contents.last().copied().ok_or(BottleError::Empty)
    }

    /// How many more units fit.
    pub fn space_available(&self) -> usize {
        self.capacity - self.contents.len()
    }

    /// Remove the top unit. Does nothing on an empty bottle.
    pub fn pour_out(&mut self) {
        self.contents.pop();
    }

    /// Push `filling` if there is room and it matches the current top.
    ///
    /// Returns `false` and leaves the bottle untouched otherwise.
    pub fn receive(&mut self, filling: Filling) -> bool {
        if self.is_full() {
            return false;
        }
        match self.contents.last() {
            Some(top) if *top != filling => false,
            _ => {
                self.contents.push(filling);
                true
            }
        }
    }

    /// `true` when empty or when every unit equals the top.
    pub fn is_single_filling(&self) -> bool {
        match self.contents.last() {
            None => true,
            Some(top) => self.contents.iter().all(|f| f == top),
        }
    }

    /// Copy of the contents, base first.
    pub fn content(&self) -> Vec<Filling> {
        self.contents.clone()
    }

    /// Iterate from top to base.
    pub fn iter(&self) -> impl Iterator<Item = Filling> + '_ {
        self.contents.iter().rev().copied()
    }

    /// Length of the uniform run at the top.
    pub fn top_run(&self) -> usize {
        match self.contents.last() {
            None => 0,
            Some(top) => self.iter().take_while(|f| f == top).count(),
        }
    }

    /// Filling at `level` counted from the base, if that slot is filled.
    pub fn get(&self, level: usize) -> Option<Filling> {
        self.contents.get(level).copied()
    }
}

impl Default for Bottle {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a Bottle {
    type Item = Filling;
    type IntoIter = core::iter::Copied<core::iter::Rev<core::slice::Iter<'a, Filling>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter().rev().copied()
    }
}

impl fmt::Display for Bottle {
    /// One line per slot, top slot first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..self.capacity).rev() {
            match self.get(level) {
                Some(filling) => writeln!(f, "{}", filling)?,
                None => writeln!(f, "{}", EMPTY)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filling::Filling::{Blue as B, Red as R};

    #[test]
    fn from_slots_puts_first_slot_on_top() {
        let bottle = Bottle::from_slots(&[Some(R), Some(R), Some(B), Some(B), Some(B)]);
        assert_eq!(bottle.top(), Ok(R));
        assert_eq!(bottle.content(), alloc::vec![B, B, B, R, R]);
        assert_eq!(bottle.capacity(), 5);
        assert!(bottle.is_full());
    }

    #[test]
    fn from_slots_skips_unfilled() {
        let bottle = Bottle::from_slots(&[None, None, Some(R), Some(B)]);
        assert_eq!(bottle.len(), 2);
        assert_eq!(bottle.space_available(), 2);
        assert_eq!(bottle.top(), Ok(R));
    }

    #[test]
    fn top_run_counts_matching_units() {
        let bottle = Bottle::with_contents(4, &[B, R, R]);
        assert_eq!(bottle.top_run(), 2);
        assert_eq!(Bottle::new(4).top_run(), 0);
    }

    #[test]
    fn iteration_restarts_each_call() {
        let bottle = Bottle::with_contents(3, &[B, R]);
        let first: alloc::vec::Vec<_> = bottle.iter().collect();
        let second: alloc::vec::Vec<_> = (&bottle).into_iter().collect();
        assert_eq!(first, alloc::vec![R, B]);
        assert_eq!(first, second);
    }
}

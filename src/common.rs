//! Error types shared by bottles, tables and games.

/// Errors returned by [`Bottle`](crate::Bottle) queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottleError {
    /// The bottle holds nothing, so it has no top.
    Empty,
}

/// Errors returned by [`Table`](crate::Table) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The bottle at `index` is empty.
    EmptyBottle { index: usize },
    /// No bottle exists at `index`; the table holds `len` bottles.
    IndexOutOfRange { index: usize, len: usize },
    /// A bottle's capacity differs from the table's.
    CapacityMismatch { expected: usize, found: usize },
}

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Table(TableError),
    /// Too few colours or too small a capacity to ever produce an unsolved round.
    InvalidConfig { symbols: usize, capacity: usize },
}

impl From<TableError> for GameError {
    fn from(err: TableError) -> Self {
        GameError::Table(err)
    }
}

impl core::fmt::Display for BottleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BottleError::Empty => write!(f, "Bottle is empty"),
        }
    }
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::EmptyBottle { index } => write!(f, "Bottle {} is empty", index),
            TableError::IndexOutOfRange { index, len } => {
                write!(f, "Bottle {} does not exist (table has {})", index, len)
            }
            TableError::CapacityMismatch { expected, found } => write!(
                f,
                "Bottle capacity {} does not match table capacity {}",
                found, expected
            ),
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Table(e) => write!(f, "Table error: {}", e),
            GameError::InvalidConfig { symbols, capacity } => write!(
                f,
                "Cannot play with {} colours and capacity {}",
                symbols, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BottleError {}
#[cfg(feature = "std")]
impl std::error::Error for TableError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}

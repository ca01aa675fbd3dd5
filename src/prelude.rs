//! Commonly used types and utilities for ease of import.

pub use crate::{
    apply_action, play_round, Action, AiPlayer, Bottle, Filling, Game, GameConfig, GameStatus,
    Outcome, Player, Table,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, outcome_message, parse_command, print_game, render_game, CliPlayer};

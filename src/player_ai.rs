use alloc::vec::Vec;
use rand::Rng;

use crate::{
    config::HELP_COST,
    game::Game,
    player::{Action, Player},
};

/// Simple AI player that picks randomly among useful moves.
pub struct AiPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Moves that would transfer at least one unit and make some progress.
///
/// Excludes pours into a full bottle and moving an already uniform bottle
/// into an empty one.
pub fn useful_moves(game: &Game) -> Vec<(usize, usize)> {
    let bottles = game.table().bottles();
    let mut moves = Vec::new();
    for (i, source) in bottles.iter().enumerate() {
        if source.is_empty() {
            continue;
        }
        for (j, target) in bottles.iter().enumerate() {
            if !game.is_valid(i, j) || target.is_full() {
                continue;
            }
            if target.is_empty() && source.is_single_filling() {
                continue;
            }
            moves.push((i, j));
        }
    }
    moves
}

impl<R: Rng> Player for AiPlayer<R> {
    fn select_action(&mut self, game: &Game) -> Action {
        let moves = useful_moves(game);
        if moves.is_empty() {
            return if game.score() >= HELP_COST {
                Action::Help
            } else {
                Action::Quit
            };
        }
        let (from, to) = moves[self.rng.random_range(0..moves.len())];
        Action::Pour { from, to }
    }
}

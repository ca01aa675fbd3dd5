use crate::{common::TableError, game::Game};

/// What a player wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pour from bottle `from` onto bottle `to`.
    Pour { from: usize, to: usize },
    /// Buy an extra empty bottle.
    Help,
    /// Stop playing.
    Quit,
}

/// Result of applying an [`Action`] to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Poured,
    InvalidMove,
    Failed(TableError),
    HelpGranted,
    HelpRefused,
    /// The player quit; the game was not touched.
    Stopped,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next action for the current game state.
    fn select_action(&mut self, game: &Game) -> Action;

    /// Inform the player of how its last action went.
    fn handle_outcome(&mut self, _action: Action, _outcome: Outcome) {}
}

/// Apply `action` to `game`. Help is only granted when the score covers it.
pub fn apply_action(game: &mut Game, action: Action) -> Outcome {
    match action {
        Action::Pour { from, to } => match game.play(from, to) {
            Ok(true) => Outcome::Poured,
            Ok(false) => Outcome::InvalidMove,
            Err(e) => Outcome::Failed(e),
        },
        Action::Help if game.score() >= crate::config::HELP_COST => {
            game.provide_help();
            Outcome::HelpGranted
        }
        Action::Help => Outcome::HelpRefused,
        Action::Quit => Outcome::Stopped,
    }
}

/// Let `player` act until the round is solved, it quits, or `max_turns`
/// actions have been taken. `observe` sees the game after every action.
///
/// Returns whether the round was solved.
pub fn play_round<P, F>(game: &mut Game, player: &mut P, max_turns: usize, mut observe: F) -> bool
where
    P: Player + ?Sized,
    F: FnMut(&Game, Action, Outcome),
{
    for _ in 0..max_turns {
        if game.is_round_finished() {
            return true;
        }
        let action = player.select_action(game);
        let outcome = apply_action(game, action);
        player.handle_outcome(action, outcome);
        observe(&*game, action, outcome);
        if outcome == Outcome::Stopped {
            break;
        }
    }
    game.is_round_finished()
}

#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    config::HELP_COST,
    game::Game,
    player::{Action, Outcome, Player},
};

/// Interactive player reading moves from standard input.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a line typed at the prompt.
///
/// Accepts `"i j"` (source and destination bottle), `help`/`ajuda`, and
/// `quit`/`q`.
pub fn parse_command(input: &str) -> Result<Action, String> {
    let line = input.trim();
    if line.is_empty() {
        return Err("Empty input".to_string());
    }
    if line.eq_ignore_ascii_case("help") || line.eq_ignore_ascii_case("ajuda") {
        return Ok(Action::Help);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Action::Quit);
    }
    let mut parts = line.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Expected two bottle indices, e.g. '0 3'".to_string());
    };
    let from: usize = from
        .parse()
        .map_err(|_| format!("Invalid bottle '{}' - must be a number", from))?;
    let to: usize = to
        .parse()
        .map_err(|_| format!("Invalid bottle '{}' - must be a number", to))?;
    Ok(Action::Pour { from, to })
}

/// Round banner, bottle indices and the board, as printed between turns.
pub fn render_game(game: &Game, round: u32) -> String {
    let width = game.number_of_bottles() * 5 + 4;
    let rule = "-".repeat(width);
    let mut out = format!(
        "\n{rule}\n{}Round {round}\n{rule}\n",
        " ".repeat((width / 2).saturating_sub(4))
    );
    for i in 0..game.number_of_bottles() {
        out.push_str(&format!("{:<5}", i));
    }
    out.push('\n');
    out.push_str(&game.to_string());
    out
}

/// Print [`render_game`] to stdout.
pub fn print_game(game: &Game, round: u32) {
    std::print!("{}", render_game(game, round));
}

/// Feedback shown after an action, if any.
pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Poured | Outcome::Stopped => None,
        Outcome::InvalidMove => Some("✗ Invalid move. Please try again.".to_string()),
        Outcome::Failed(e) => Some(format!("✗ {}. Please try again.", e)),
        Outcome::HelpGranted => Some("✓ A new bottle was added to the table.".to_string()),
        Outcome::HelpRefused => Some(format!(
            "✗ Not enough points for a new bottle (needs {}).",
            HELP_COST
        )),
    }
}

impl Player for CliPlayer {
    fn select_action(&mut self, game: &Game) -> Action {
        let stdin = io::stdin();
        loop {
            if game.score() >= HELP_COST {
                std::println!("Need another bottle? Type 'help' ({} points).", HELP_COST);
            }
            std::print!("Your move ('i j' pours bottle i into bottle j, 'quit' to stop): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Action::Quit,
                Ok(_) => {}
            }
            match parse_command(&line) {
                Ok(Action::Pour { from, to }) if !game.is_valid(from, to) => {
                    std::println!("✗ Invalid move. Please try again.");
                }
                Ok(action) => return action,
                Err(e) => std::println!("✗ {}", e),
            }
        }
    }

    fn handle_outcome(&mut self, _action: Action, outcome: Outcome) {
        if let Some(message) = outcome_message(outcome) {
            std::println!("{}", message);
        }
    }
}

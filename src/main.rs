use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use water_sort::{
    apply_action, init_logging, play_round, print_game, AiPlayer, CliPlayer, Game, GameConfig,
    Outcome, Player, MAX_CAPACITY, MAX_SYMBOLS, MIN_CAPACITY, MIN_SYMBOLS,
};

#[derive(Parser)]
#[command(author, version, about = "Water sort puzzle in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct Settings {
    /// Number of colours (clamped to 2-8).
    #[arg(long, default_value_t = 4)]
    symbols: usize,
    /// Units per bottle (clamped to 2-8).
    #[arg(long, default_value_t = water_sort::DEFAULT_CAPACITY)]
    capacity: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Starting score.
    #[arg(long, default_value_t = 0)]
    score: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play at the terminal.
    Play {
        #[command(flatten)]
        settings: Settings,
    },
    /// Watch the AI play.
    Auto {
        #[command(flatten)]
        settings: Settings,
        /// Rounds to play.
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Give up a round after this many actions.
        #[arg(long, default_value_t = 500)]
        max_turns: usize,
    },
}

impl Settings {
    fn config(&self) -> GameConfig {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        if self.symbols < MIN_SYMBOLS || self.symbols > MAX_SYMBOLS {
            println!(
                "Colours must be between {} and {}; using {}.",
                MIN_SYMBOLS,
                MAX_SYMBOLS,
                self.symbols.clamp(MIN_SYMBOLS, MAX_SYMBOLS)
            );
        }
        if self.capacity < MIN_CAPACITY || self.capacity > MAX_CAPACITY {
            println!(
                "Capacity must be between {} and {}; using {}.",
                MIN_CAPACITY,
                MAX_CAPACITY,
                self.capacity.clamp(MIN_CAPACITY, MAX_CAPACITY)
            );
        }
        GameConfig::new(self.symbols, self.capacity, seed)
            .with_score(self.score)
            .clamped()
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { settings } => {
            print_welcome();
            let config = settings.config();
            if let Some(s) = settings.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let game = Game::from_config(config)?;
            run_cli(game)?;
        }
        Commands::Auto {
            settings,
            rounds,
            max_turns,
        } => {
            let config = settings.config();
            let mut game = Game::from_config(config)?;
            let mut ai = AiPlayer::new(SmallRng::seed_from_u64(config.seed));
            for round in 1..=rounds {
                if round > 1 {
                    game.start_new_round();
                }
                print_game(&game, round);
                let solved = play_round(&mut game, &mut ai, max_turns, |g, action, outcome| {
                    println!("\nAI: {:?} -> {:?}", action, outcome);
                    print_game(g, round);
                });
                if solved {
                    println!("\nRound {} solved in {} moves.", round, game.moves());
                } else {
                    println!("\nRound {} abandoned after {} moves.", round, game.moves());
                }
            }
            println!("Final score: {}", game.score());
        }
    }
    Ok(())
}

fn run_cli(mut game: Game) -> anyhow::Result<()> {
    let mut player = CliPlayer::new();
    let mut round = 1;
    loop {
        print_game(&game, round);
        let action = player.select_action(&game);
        let outcome = apply_action(&mut game, action);
        player.handle_outcome(action, outcome);
        if outcome == Outcome::Stopped {
            println!("Thanks for playing! Final score: {}", game.score());
            return Ok(());
        }
        if game.is_round_finished() {
            println!("\nWell played!");
            print!("{}", game);
            if !ask_yes("Play another round? yes/no: ")? {
                println!("Thanks for playing! Final score: {}", game.score());
                return Ok(());
            }
            game.start_new_round();
            round += 1;
        }
    }
}

fn ask_yes(prompt: &str) -> anyhow::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_ascii_lowercase().starts_with('y'))
}

fn print_welcome() {
    println!("Welcome to Water Sort!\n");
    println!("* Sort the colours so that every bottle holds a single colour.");
    println!("* Each move pours the top run of one bottle onto another bottle");
    println!("  that is empty or has the same colour on top.");
    println!(
        "* Type 'help' for an extra empty bottle, at a cost of {} points.\n",
        water_sort::HELP_COST
    );
}

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use water_sort::{init_logging, play_round, AiPlayer, Game, GameConfig};

const MAX_TURNS: usize = 500;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: u32 = args[2].parse()?;

    let mut game = Game::from_config(GameConfig {
        seed,
        ..GameConfig::default()
    })?;
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(seed));

    let mut results = Vec::new();
    for round in 0..rounds {
        if round > 0 {
            game.start_new_round();
        }
        let solved = play_round(&mut game, &mut ai, MAX_TURNS, |_, _, _| {});
        results.push(json!({
            "round": round + 1,
            "solved": solved,
            "moves": game.moves(),
            "bottles": game.number_of_bottles(),
        }));
    }

    let result = json!({
        "seed": seed,
        "rounds": results,
        "score": game.score(),
        "state": game.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

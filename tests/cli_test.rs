#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use water_sort::Filling::{Blue, Red};
    use water_sort::{
        apply_action, outcome_message, parse_command, play_round, render_game, useful_moves,
        Action, AiPlayer, Bottle, Filling, Game, Outcome, Player, Table, TableError, HELP_COST,
    };

    #[test]
    fn test_render_game_shows_banner_indices_and_board() {
        let table = Table::from_bottles(
            vec![
                Bottle::with_contents(2, &[Red, Blue]),
                Bottle::with_contents(2, &[Blue, Red]),
                Bottle::new(2),
            ],
            2,
            0,
        )
        .unwrap();
        let game = Game::from_table(table, 0).unwrap();
        let out = render_game(&game, 3);
        assert!(out.contains("Round 3"));
        assert!(out.contains("0    1    2    \n"));
        assert!(out.contains("Score: 0"));
        assert!(out.ends_with(&game.to_string()));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(Outcome::Poured), None);
        assert_eq!(outcome_message(Outcome::Stopped), None);
        assert!(outcome_message(Outcome::InvalidMove).unwrap().starts_with('✗'));
        assert!(outcome_message(Outcome::HelpGranted).unwrap().starts_with('✓'));
        let refused = outcome_message(Outcome::HelpRefused).unwrap();
        assert!(refused.contains(&HELP_COST.to_string()));
        let failed = outcome_message(Outcome::Failed(TableError::EmptyBottle { index: 4 })).unwrap();
        assert!(failed.contains(&TableError::EmptyBottle { index: 4 }.to_string()));
    }

    #[test]
    fn test_parse_pour() {
        assert_eq!(parse_command("0 3"), Ok(Action::Pour { from: 0, to: 3 }));
        assert_eq!(parse_command("  12   4 \n"), Ok(Action::Pour { from: 12, to: 4 }));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("help"), Ok(Action::Help));
        assert_eq!(parse_command("AJUDA"), Ok(Action::Help));
        assert_eq!(parse_command("quit"), Ok(Action::Quit));
        assert_eq!(parse_command("q"), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("3").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("-1 2").is_err());
    }

    #[test]
    fn test_help_requires_points() {
        let mut game = Game::new(&Filling::ALL, 3, 1, 3).unwrap();
        let bottles = game.number_of_bottles();
        assert_eq!(apply_action(&mut game, Action::Help), Outcome::HelpRefused);
        assert_eq!(game.number_of_bottles(), bottles);

        let mut game = Game::with_score(&Filling::ALL, 3, 1, 3, HELP_COST).unwrap();
        assert_eq!(apply_action(&mut game, Action::Help), Outcome::HelpGranted);
        assert_eq!(game.number_of_bottles(), bottles + 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_apply_reports_invalid_and_failed_moves() {
        let table = Table::from_bottles(
            vec![Bottle::with_contents(2, &[Red, Blue]), Bottle::new(2), Bottle::new(2)],
            2,
            0,
        )
        .unwrap();
        let mut game = Game::from_table(table, 0).unwrap();
        assert_eq!(
            apply_action(&mut game, Action::Pour { from: 0, to: 0 }),
            Outcome::InvalidMove
        );
        assert!(matches!(
            apply_action(&mut game, Action::Pour { from: 1, to: 2 }),
            Outcome::Failed(_)
        ));
        assert_eq!(apply_action(&mut game, Action::Quit), Outcome::Stopped);
        assert_eq!(
            apply_action(&mut game, Action::Pour { from: 0, to: 1 }),
            Outcome::Poured
        );
    }

    #[test]
    fn test_useful_moves_skip_pointless_pours() {
        let table = Table::from_bottles(
            vec![
                Bottle::with_contents(3, &[Red, Red]),
                Bottle::new(3),
                Bottle::with_contents(3, &[Blue, Blue, Red]),
            ],
            3,
            0,
        )
        .unwrap();
        let game = Game::from_table(table, 0).unwrap();
        let moves = useful_moves(&game);
        assert!(!moves.contains(&(0, 1)));
        assert!(moves.contains(&(2, 0)));
        assert!(moves.contains(&(2, 1)));
        assert!(!moves.contains(&(0, 2)));
    }

    #[test]
    fn test_ai_only_picks_valid_moves() {
        let mut game = Game::new(&Filling::ALL, 4, 99, 4).unwrap();
        let mut ai = AiPlayer::new(SmallRng::seed_from_u64(99));
        for _ in 0..50 {
            if game.is_round_finished() {
                break;
            }
            match ai.select_action(&game) {
                Action::Pour { from, to } => {
                    assert!(game.is_valid(from, to));
                    assert_eq!(apply_action(&mut game, Action::Pour { from, to }), Outcome::Poured);
                }
                Action::Help | Action::Quit => break,
            }
        }
    }

    #[test]
    fn test_ai_quits_when_stuck_without_points() {
        let table = Table::from_bottles(
            vec![
                Bottle::with_contents(2, &[Red, Blue]),
                Bottle::with_contents(2, &[Blue, Red]),
            ],
            2,
            0,
        )
        .unwrap();
        let mut game = Game::from_table(table, 0).unwrap();
        let mut ai = AiPlayer::new(SmallRng::seed_from_u64(1));
        assert_eq!(ai.select_action(&game), Action::Quit);
        assert!(!play_round(&mut game, &mut ai, 10, |_, _, _| {}));

        let table = Table::from_bottles(
            vec![
                Bottle::with_contents(2, &[Red, Blue]),
                Bottle::with_contents(2, &[Blue, Red]),
            ],
            2,
            0,
        )
        .unwrap();
        let game = Game::from_table(table, HELP_COST).unwrap();
        assert_eq!(ai.select_action(&game), Action::Help);
    }

    #[test]
    fn test_reproducible_ai_rounds() {
        let run = |seed: u64| {
            let mut game = Game::new(&Filling::ALL, 3, seed, 3).unwrap();
            let mut ai = AiPlayer::new(SmallRng::seed_from_u64(seed));
            let mut log = Vec::new();
            play_round(&mut game, &mut ai, 100, |_, action, _| log.push(action));
            (log, game.state())
        };
        assert_eq!(run(42), run(42));
    }
}

use chess_core::{Color, Game, PieceType, Square};
use chess_engine::{generate_legal_moves, suggest, Suggester};
use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn suggestions_stay_legal_through_random_games() {
    for seed in 0..8u64 {
        let mut game = Game::new();
        let mut driver = Suggester::seeded(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);

        for _ in 0..150 {
            let moves = generate_legal_moves(&game);
            let capture = suggest(&game, true, &mut rng);
            let quiet = suggest(&game, false, &mut rng);

            assert_eq!(capture.is_none(), moves.captures.is_empty());
            assert_eq!(quiet.is_none(), moves.quiet.is_empty());
            for mv in capture.iter().chain(quiet.iter()) {
                assert!(game.is_legal(mv.from, mv.to));
            }
            if let Some(mv) = capture {
                assert!(game.is_capture(mv));
            }
            if let Some(mv) = quiet {
                assert!(!game.is_capture(mv));
            }

            match driver.any_move(&game) {
                Some(mv) => assert!(game.make_move(mv).is_ok()),
                None => break,
            }
        }
        assert!(game.inventories_consistent());
    }
}

#[test]
fn suggesting_does_not_touch_the_game() {
    let game = Game::new();
    let before = game.clone();
    let mut suggester = Suggester::seeded(11);
    for _ in 0..10 {
        suggester.suggest(&game, false);
        suggester.suggest(&game, true);
    }
    assert_eq!(game.board(), before.board());
    assert_eq!(game.side_to_move(), before.side_to_move());
    assert_eq!(game.inventory(Color::White), before.inventory(Color::White));
}

#[test]
fn seeded_games_replay_identically() {
    let replay = |seed| {
        let mut game = Game::new();
        let mut suggester = Suggester::seeded(seed).with_prefer_captures(true);
        let mut played = Vec::new();
        while let Some(mv) = suggester.any_move(&game) {
            if played.len() == 80 {
                break;
            }
            assert!(game.make_move(mv).is_ok());
            played.push(mv);
        }
        played
    };
    assert_eq!(replay(99), replay(99));
}

#[test]
fn quiet_suggestions_cover_every_opening_move() {
    let game = Game::new();
    let mut suggester = Suggester::seeded(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        if let Some(mv) = suggester.suggest(&game, false) {
            seen.insert(mv);
        }
    }
    assert_eq!(seen.len(), 20);
    let knight = Square::new(7, 1).unwrap();
    assert!(seen.iter().any(|m| m.from == knight));
    assert_eq!(game.piece_at(knight).map(|p| p.piece_type), Some(PieceType::Knight));
}

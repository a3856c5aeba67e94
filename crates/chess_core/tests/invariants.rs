use chess_core::{new_game, Color, Game, Move, Square};
use proptest::prelude::*;

fn all_legal_moves(game: &Game) -> Vec<Move> {
    Square::all().flat_map(|sq| game.legal_moves_from(sq)).collect()
}

fn square(index: u8) -> Square {
    Square::from_index(index as usize).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inventories_track_board_through_legal_games(choices in prop::collection::vec(any::<u16>(), 0..120)) {
        let mut game = new_game();
        for choice in choices {
            let moves = all_legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice as usize % moves.len()];
            let mover = game.side_to_move();
            let white_before = game.inventory(Color::White).len() + game.captured(Color::White).len();
            let black_before = game.inventory(Color::Black).len() + game.captured(Color::Black).len();

            prop_assert!(game.make_move(mv).is_ok());
            prop_assert_eq!(game.side_to_move(), mover.opposite());
            prop_assert!(game.inventories_consistent());
            // Survivors plus captures always account for all sixteen pieces.
            prop_assert_eq!(game.inventory(Color::White).len() + game.captured(Color::White).len(), white_before);
            prop_assert_eq!(game.inventory(Color::Black).len() + game.captured(Color::Black).len(), black_before);
        }
    }

    #[test]
    fn arbitrary_requests_flip_turn_only_on_success(requests in prop::collection::vec((0u8..64, 0u8..64), 0..200)) {
        let mut game = new_game();
        for (from, to) in requests {
            let (from, to) = (square(from), square(to));
            let before = game.clone();
            let legal = game.is_legal(from, to);

            prop_assert_eq!(game.apply_move(from, to), legal);
            if legal {
                prop_assert_eq!(game.side_to_move(), before.side_to_move().opposite());
            } else {
                prop_assert_eq!(game.side_to_move(), before.side_to_move());
                prop_assert_eq!(game.board(), before.board());
                prop_assert_eq!(game.inventory(Color::White), before.inventory(Color::White));
                prop_assert_eq!(game.inventory(Color::Black), before.inventory(Color::Black));
            }
            prop_assert!(game.inventories_consistent());
        }
    }
}

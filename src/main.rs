use anyhow::Result;
use chess_core::{Color, Game, PieceType};
use chess_engine::Suggester;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a random self-play game under the move-legality rules", long_about = None)]
struct Args {
    /// Seed for the move picker; fresh entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Take a capture whenever one is available
    #[arg(long)]
    prefer_captures: bool,

    /// Print the board after every move
    #[arg(long)]
    show_board: bool,
}

fn king_captured(game: &Game) -> Option<Color> {
    [Color::White, Color::Black]
        .into_iter()
        .find(|&color| game.captured(color).contains(&PieceType::King))
}

fn format_captured(kinds: &[PieceType]) -> String {
    kinds.iter().map(|kind| kind.symbol()).collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let suggester = match args.seed {
        Some(seed) => Suggester::seeded(seed),
        None => Suggester::from_entropy(),
    };
    let mut suggester = suggester.with_prefer_captures(args.prefer_captures);
    let mut game = Game::new();

    println!("{}", game.board());

    let mut plies = 0;
    while plies < args.max_plies {
        let Some(mv) = suggester.any_move(&game) else {
            println!("{:?} has no legal move", game.side_to_move());
            break;
        };
        let mover = game.side_to_move();
        let captured = game.make_move(mv)?;
        plies += 1;

        match captured {
            Some(piece) => println!(
                "{:>3}. {:?} ({}, {}) x ({}, {}) {:?}",
                plies,
                mover,
                mv.from.row(),
                mv.from.col(),
                mv.to.row(),
                mv.to.col(),
                piece.piece_type
            ),
            None => println!(
                "{:>3}. {:?} ({}, {}) -> ({}, {})",
                plies,
                mover,
                mv.from.row(),
                mv.from.col(),
                mv.to.row(),
                mv.to.col()
            ),
        }
        if args.show_board {
            println!("{}", game.board());
        }

        if let Some(color) = king_captured(&game) {
            println!("{:?} king captured", color);
            break;
        }
    }

    info!("game over after {} plies", plies);
    println!("{}", game.board());
    println!("White lost: {}", format_captured(game.captured(Color::White)));
    println!("Black lost: {}", format_captured(game.captured(Color::Black)));
    Ok(())
}

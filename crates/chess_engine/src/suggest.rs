use chess_core::{Game, Move};
use log::trace;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::movegen::generate_legal_moves;

/// Picks a legal move uniformly at random, either among captures or among
/// non-captures. `None` means that partition is empty.
///
/// Reads the game only; the answer is stale as soon as the game changes.
pub fn suggest<R: Rng + ?Sized>(game: &Game, want_capture: bool, rng: &mut R) -> Option<Move> {
    let moves = generate_legal_moves(game);
    trace!(
        "{:?} to move: {} quiet, {} captures",
        game.side_to_move(),
        moves.quiet.len(),
        moves.captures.len()
    );
    let pool = if want_capture { &moves.captures } else { &moves.quiet };
    pool.choose(rng).copied()
}

/// Random move picker with its own generator.
#[derive(Debug, Clone)]
pub struct Suggester {
    rng: SmallRng,
    prefer_captures: bool,
}

impl Suggester {
    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            prefer_captures: false,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            prefer_captures: false,
        }
    }

    pub fn with_prefer_captures(mut self, prefer_captures: bool) -> Self {
        self.prefer_captures = prefer_captures;
        self
    }

    pub fn suggest(&mut self, game: &Game, want_capture: bool) -> Option<Move> {
        suggest(game, want_capture, &mut self.rng)
    }

    /// A move for the side to move, or `None` if it has none.
    ///
    /// With `prefer_captures` a capture is taken whenever one exists;
    /// otherwise every legal move is equally likely.
    pub fn any_move(&mut self, game: &Game) -> Option<Move> {
        let moves = generate_legal_moves(game);
        if self.prefer_captures {
            if let Some(&mv) = moves.captures.choose(&mut self.rng) {
                return Some(mv);
            }
            return moves.quiet.choose(&mut self.rng).copied();
        }

        if moves.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..moves.len());
        match pick.checked_sub(moves.quiet.len()) {
            Some(i) => moves.captures.get(i).copied(),
            None => moves.quiet.get(pick).copied(),
        }
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Self::from_entropy()
    }
}

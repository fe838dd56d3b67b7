//! Easy tier: uniformly random legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl RandomEngine {
    /// Engine seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    /// Engine drawing from a caller-supplied generator (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

/// Uniform pick among `color`'s legal moves.
pub fn choose_random_move<R: Rng + ?Sized>(
    game_state: &GameState,
    color: Color,
    rng: &mut R,
) -> Option<Move> {
    let legal_moves = all_legal_moves(&game_state.board_state(), color);
    legal_moves.as_slice().choose(rng).copied()
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<Move> {
        choose_random_move(game_state, color, &mut self.rng)
    }
}

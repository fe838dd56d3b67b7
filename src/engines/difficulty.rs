//! Difficulty tiers and the AI-turn entry point.
//!
//! `Easy` picks uniformly at random, `Medium` searches two plies and `Hard`
//! four. No other depths are exposed through `choose_move`.

use log::debug;
use rand::Rng;

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::{choose_random_move, RandomEngine};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, Difficulty, Move};
use crate::game_state::game_state::GameState;
use crate::search::minimax::SearchConfig;

impl Difficulty {
    /// Search parameters of the tier, `None` for random play.
    pub const fn search_config(self) -> Option<SearchConfig> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(SearchConfig { max_depth: 2 }),
            Difficulty::Hard => Some(SearchConfig { max_depth: 4 }),
        }
    }
}

/// Boxed engine for a tier, for callers that keep one engine per player.
pub fn engine_for(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty.search_config() {
        None => Box::new(RandomEngine::new()),
        Some(config) => Box::new(MinimaxEngine::new(config.max_depth)),
    }
}

/// Move for `color` at `difficulty`, or `None` if it has no legal move.
pub fn choose_move(game_state: &GameState, color: Color, difficulty: Difficulty) -> Option<Move> {
    choose_move_with_rng(game_state, color, difficulty, &mut rand::rng())
}

/// `choose_move` with the randomness of the easy tier supplied by the caller.
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    game_state: &GameState,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let chosen = match difficulty.search_config() {
        None => choose_random_move(game_state, color, rng),
        Some(config) => MinimaxEngine::new(config.max_depth).search(game_state, color),
    };
    debug!(
        "{difficulty} {color} chose {:?}",
        chosen.map(|mv| format!("{}{}", mv.from, mv.to))
    );
    chosen
}

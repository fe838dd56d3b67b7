//! Engine abstraction shared by the difficulty tiers.

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for `color`, or `None` when it has no legal move.
    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<Move>;
}

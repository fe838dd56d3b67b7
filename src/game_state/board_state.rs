//! The part of a game the rules need to decide legality.
//!
//! `BoardState` is a plain `Copy` value: the board plus side to move,
//! castling rights and the en-passant target. Move generation, check
//! detection and the search all work on scratch copies of it, so nothing
//! they try can leak into the caller's `GameState`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
}

impl BoardState {
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::ALL,
        }
    }

    /// Same position with `color` to move and no en-passant window.
    ///
    /// Used when a caller asks for moves of the side that is not on turn.
    pub fn with_side_to_move(&self, color: Color) -> Self {
        if color == self.side_to_move {
            return *self;
        }
        Self {
            side_to_move: color,
            en_passant_target: None,
            ..*self
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

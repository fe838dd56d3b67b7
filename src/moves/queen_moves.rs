use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Rook rays first, then bishop rays.
#[inline]
pub fn queen_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    rook_targets(board, from, color, out);
    bishop_targets(board, from, color, out);
}

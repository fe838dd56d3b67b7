//! King single-step targets. Castling lives with the legality rules in
//! `move_generation::legal_moves_king` since it depends on attacks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_step_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}

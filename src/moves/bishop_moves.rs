use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::slide_targets;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}

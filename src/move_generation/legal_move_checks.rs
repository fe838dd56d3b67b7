//! Attack and check oracle.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::attack_targets;

/// Whether any piece of `by_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Position, by_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces_of(by_color) {
        targets.clear();
        attack_targets(board, from, piece, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked. A board without that king is
/// treated as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        trace!("no {color} king on board; treating as not in check");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Walk each direction from `from` one square at a time.
///
/// Empty squares are collected and walked through; the first occupied
/// square ends the ray and is collected only if it holds an enemy piece.
pub fn slide_targets(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut to = from.offset(d_row, d_col);
        while to.is_valid() {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            to = to.offset(d_row, d_col);
        }
    }
}

/// Single-step targets for the fixed-offset pieces (knight, king).
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let to = from.offset(d_row, d_col);
        if !to.is_valid() {
            continue;
        }
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(to),
        }
    }
}

//! Pawn pushes, captures and en-passant targets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// The two diagonal-forward squares a pawn attacks, off-board ones dropped.
pub fn pawn_attack_squares(from: Position, color: Color) -> impl Iterator<Item = Position> {
    let dir = color.pawn_direction();
    [from.offset(dir, -1), from.offset(dir, 1)]
        .into_iter()
        .filter(|pos| pos.is_valid())
}

/// Pseudo-legal pawn destinations.
///
/// En passant onto `en_passant_target` is only offered when an enemy pawn
/// actually stands beside the mover on the target's column.
pub fn pawn_targets(
    board: &Board,
    from: Position,
    color: Color,
    en_passant_target: Option<Position>,
    out: &mut Vec<Position>,
) {
    let dir = color.pawn_direction();

    let one_forward = from.offset(dir, 0);
    if one_forward.is_valid() && board.piece_at(one_forward).is_none() {
        out.push(one_forward);

        if from.row == color.pawn_start_row() as i8 {
            let two_forward = from.offset(2 * dir, 0);
            if two_forward.is_valid() && board.piece_at(two_forward).is_none() {
                out.push(two_forward);
            }
        }
    }

    for to in pawn_attack_squares(from, color) {
        match board.piece_at(to) {
            Some(piece) if piece.color != color => out.push(to),
            Some(_) => {}
            None => {
                if en_passant_target == Some(to) && is_en_passant_victim(board, from, to, color) {
                    out.push(to);
                }
            }
        }
    }
}

/// Square of the pawn an en-passant capture from `from` to `to` removes.
#[inline]
pub const fn en_passant_victim_square(from: Position, to: Position) -> Position {
    Position::new(from.row, to.col)
}

fn is_en_passant_victim(board: &Board, from: Position, to: Position, color: Color) -> bool {
    matches!(
        board.piece_at(en_passant_victim_square(from, to)),
        Some(Piece { kind: PieceKind::Pawn, color: victim, .. }) if victim != color
    )
}

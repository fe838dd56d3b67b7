//! Per-piece dispatch shared by move generation and the attack oracle.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::castling_targets;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_step_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_attack_squares, pawn_targets};
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Pseudo-legal destinations of the piece on `from`, castling included.
///
/// Empty when `from` holds no piece. Self-check is not considered.
pub fn pseudo_legal_moves(state: &BoardState, from: Position) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = state.board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_targets(
            &state.board,
            from,
            piece.color,
            state.en_passant_target,
            &mut out,
        ),
        PieceKind::Knight => knight_targets(&state.board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_targets(&state.board, from, piece.color, &mut out),
        PieceKind::Rook => rook_targets(&state.board, from, piece.color, &mut out),
        PieceKind::Queen => queen_targets(&state.board, from, piece.color, &mut out),
        PieceKind::King => {
            king_step_targets(&state.board, from, piece.color, &mut out);
            castling_targets(state, from, piece, &mut out);
        }
    }

    out
}

/// Squares `piece` standing on `from` attacks, appended to `out`.
///
/// Never includes castling, so the oracle cannot recurse into itself.
/// Pawns attack their diagonals whether or not anything stands there and
/// never attack the square ahead of them.
pub fn attack_targets(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    match piece.kind {
        PieceKind::Pawn => out.extend(pawn_attack_squares(from, piece.color)),
        PieceKind::Knight => knight_targets(board, from, piece.color, out),
        PieceKind::Bishop => bishop_targets(board, from, piece.color, out),
        PieceKind::Rook => rook_targets(board, from, piece.color, out),
        PieceKind::Queen => queen_targets(board, from, piece.color, out),
        PieceKind::King => king_step_targets(board, from, piece.color, out),
    }
}

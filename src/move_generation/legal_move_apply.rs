//! Unchecked move application on a `BoardState` copy.
//!
//! `play_move` trusts its caller to pass a pseudo-legal `(from, to)` pair and
//! performs the full board transition: captures (en passant included),
//! castling rook relocation, auto-promotion, en-passant window and castling
//! rights. Callers own legality; `GameState::apply_move` checks it first.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::en_passant_victim_square;

/// Returns the position after the move and the record of what happened, or
/// `None` if `from` is empty.
pub fn play_move(state: &BoardState, from: Position, to: Position) -> Option<(BoardState, Move)> {
    let piece = state.board.piece_at(from)?;
    let color = piece.color;
    let mut next = *state;

    let is_en_passant = piece.kind == PieceKind::Pawn
        && from.col != to.col
        && state.en_passant_target == Some(to)
        && state.board.piece_at(to).is_none();
    let is_castling = piece.kind == PieceKind::King && (to.col - from.col).abs() == 2;
    let is_promotion = piece.kind == PieceKind::Pawn && to.row == color.promotion_row() as i8;

    let captured_piece = if is_en_passant {
        next.board.take(en_passant_victim_square(from, to))
    } else {
        state.board.piece_at(to)
    };

    next.board.set(from, None);
    let landed = if is_promotion {
        Piece::new(PieceKind::Queen, color).moved()
    } else {
        piece.moved()
    };
    next.board.set(to, Some(landed));

    if is_castling {
        let (rook_from_col, rook_to_col) = if to.col > from.col {
            (KING_SIDE_ROOK_COL, KING_SIDE_CASTLE_COL - 1)
        } else {
            (QUEEN_SIDE_ROOK_COL, QUEEN_SIDE_CASTLE_COL + 1)
        };
        if let Some(rook) = next.board.take(Position::new(from.row, rook_from_col)) {
            next.board.set(Position::new(from.row, rook_to_col), Some(rook.moved()));
        }
    }

    next.en_passant_target = if piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2 {
        Some(Position::new((from.row + to.row) / 2, from.col))
    } else {
        None
    };

    update_castling_rights(&mut next.castling_rights, piece, from, to);
    next.side_to_move = color.opposite();

    let mv = Move {
        from,
        to,
        piece,
        captured_piece,
        is_en_passant,
        is_castling,
        is_promotion,
        promotion_kind: is_promotion.then_some(PieceKind::Queen),
    };

    Some((next, mv))
}

fn update_castling_rights(rights: &mut CastlingRights, piece: Piece, from: Position, to: Position) {
    let color = piece.color;

    if piece.kind == PieceKind::King {
        rights.revoke_all(color);
    }

    if piece.kind == PieceKind::Rook && from.row == color.home_row() as i8 {
        match from.col {
            QUEEN_SIDE_ROOK_COL => rights.revoke_queen_side(color),
            KING_SIDE_ROOK_COL => rights.revoke_king_side(color),
            _ => {}
        }
    }

    // Landing on the opponent's rook corner removes that right.
    let enemy = color.opposite();
    if to.row == enemy.home_row() as i8 {
        match to.col {
            QUEEN_SIDE_ROOK_COL => rights.revoke_queen_side(enemy),
            KING_SIDE_ROOK_COL => rights.revoke_king_side(enemy),
            _ => {}
        }
    }
}

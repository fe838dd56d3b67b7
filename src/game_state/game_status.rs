//! Position classification: active, check, checkmate, stalemate, draw.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Status of `state` from the point of view of its side to move.
pub fn classify_board_state(state: &BoardState) -> GameStatus {
    let side = state.side_to_move;
    let in_check = is_king_in_check(&state.board, side);

    if !has_legal_move(state, side) {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if in_check {
        return GameStatus::Check;
    }
    if is_insufficient_material(&state.board) {
        return GameStatus::Draw;
    }
    GameStatus::Active
}

/// Bare kings, or bare kings plus a single bishop or knight.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut others = board
        .pieces()
        .map(|(_, piece)| piece.kind)
        .filter(|kind| *kind != PieceKind::King);

    match (others.next(), others.next()) {
        (None, _) => true,
        (Some(PieceKind::Bishop | PieceKind::Knight), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_board_state;

    fn classify_fen(fen: &str) -> GameStatus {
        classify_board_state(&parse_board_state(fen).expect("valid test FEN"))
    }

    #[test]
    fn initial_position_is_active() {
        assert_eq!(classify_board_state(&BoardState::initial()), GameStatus::Active);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        assert_eq!(classify_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"), GameStatus::Checkmate);
    }

    #[test]
    fn check_with_escape_is_check() {
        assert_eq!(classify_fen("R5k1/5p1p/8/8/8/8/8/6K1 b - - 0 1"), GameStatus::Check);
    }

    #[test]
    fn king_and_pawn_stalemate_is_not_checkmate() {
        // Black king on a8 boxed in by the pawn on a7 and king on b6.
        assert_eq!(classify_fen("k7/P7/1K6/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn bare_kings_draw_but_a_pawn_keeps_the_game_alive() {
        assert_eq!(classify_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), GameStatus::Draw);
        assert_eq!(classify_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), GameStatus::Active);
    }

    #[test]
    fn lone_minor_piece_is_insufficient() {
        assert_eq!(classify_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"), GameStatus::Draw);
        assert_eq!(classify_fen("4k1n1/8/8/8/8/8/8/4K3 w - - 0 1"), GameStatus::Draw);
        assert_eq!(classify_fen("4k1n1/8/8/8/8/8/8/2B1K3 w - - 0 1"), GameStatus::Active);
        assert_eq!(classify_fen("4k3/8/8/8/8/8/8/3RK3 w - - 0 1"), GameStatus::Active);
    }
}

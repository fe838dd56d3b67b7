//! Castling eligibility.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

/// Append the castling destinations available to `king` on `king_from`.
///
/// Requires an unmoved king on its home square, the matching right, an
/// unmoved rook of the same color in the corner, empty squares between them,
/// and no attacked square on the king's path (start and end included).
pub fn castling_targets(
    state: &BoardState,
    king_from: Position,
    king: Piece,
    out: &mut Vec<Position>,
) {
    let color = king.color;
    if king.has_moved || king_from != Position::new(color.home_row() as i8, KING_HOME_COL) {
        return;
    }

    if state.castling_rights.king_side(color) {
        if let Some(to) = castle_destination(state, king_from, color, KING_SIDE_ROOK_COL, KING_SIDE_CASTLE_COL) {
            out.push(to);
        }
    }
    if state.castling_rights.queen_side(color) {
        if let Some(to) = castle_destination(state, king_from, color, QUEEN_SIDE_ROOK_COL, QUEEN_SIDE_CASTLE_COL) {
            out.push(to);
        }
    }
}

fn castle_destination(
    state: &BoardState,
    king_from: Position,
    color: Color,
    rook_col: i8,
    king_to_col: i8,
) -> Option<Position> {
    let row = king_from.row;

    match state.board.piece_at(Position::new(row, rook_col)) {
        Some(Piece { kind: PieceKind::Rook, color: rook_color, has_moved: false }) if rook_color == color => {}
        _ => return None,
    }

    let (low, high) = if rook_col < king_from.col {
        (rook_col, king_from.col)
    } else {
        (king_from.col, rook_col)
    };
    if ((low + 1)..high).any(|col| state.board.piece_at(Position::new(row, col)).is_some()) {
        return None;
    }

    let enemy = color.opposite();
    let step = if king_to_col > king_from.col { 1 } else { -1 };
    let mut col = king_from.col;
    loop {
        if is_square_attacked(&state.board, Position::new(row, col), enemy) {
            return None;
        }
        if col == king_to_col {
            break;
        }
        col += step;
    }

    Some(Position::new(row, king_to_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_board_state;

    fn castles(fen: &str, from: Position) -> Vec<Position> {
        let state = parse_board_state(fen).expect("valid test FEN");
        let king = state.board.piece_at(from).expect("king on square");
        let mut out = Vec::new();
        castling_targets(&state, from, king, &mut out);
        out.sort();
        out
    }

    const WHITE_KING: Position = Position::new(7, 4);
    const BLACK_KING: Position = Position::new(0, 4);

    #[test]
    fn both_sides_available_with_clear_path() {
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", WHITE_KING);
        assert_eq!(out, vec![Position::new(7, 2), Position::new(7, 6)]);

        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", BLACK_KING);
        assert_eq!(out, vec![Position::new(0, 2), Position::new(0, 6)]);
    }

    #[test]
    fn blocked_path_prevents_castling() {
        let out = castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", WHITE_KING);
        assert!(out.is_empty());
    }

    #[test]
    fn queen_side_b_file_must_be_empty_too() {
        let out = castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", WHITE_KING);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_right_prevents_castling() {
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1", WHITE_KING);
        assert_eq!(out, vec![Position::new(7, 6)]);
    }

    #[test]
    fn cannot_castle_out_of_or_through_check() {
        // Rook on e-file gives check.
        let out = castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", WHITE_KING);
        assert!(out.is_empty());

        // Rook covers f1, queen-side still fine.
        let out = castles("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1", WHITE_KING);
        assert_eq!(out, vec![Position::new(7, 2)]);

        // Rook covers g1, the king's landing square.
        let out = castles("6rk/8/8/8/8/8/8/R3K2R w KQ - 0 1", WHITE_KING);
        assert_eq!(out, vec![Position::new(7, 2)]);
    }

    #[test]
    fn attacked_b_file_does_not_stop_queen_side() {
        let out = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", WHITE_KING);
        assert_eq!(out, vec![Position::new(7, 2)]);
    }

    #[test]
    fn pawn_diagonal_covers_transit_square() {
        // Black pawn on e2 attacks f1.
        let out = castles("4k3/8/8/8/8/8/4p3/4K2R w K - 0 1", WHITE_KING);
        assert!(out.is_empty());
    }
}

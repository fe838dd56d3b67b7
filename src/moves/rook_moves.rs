use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::slide_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_targets(board, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let mut out = Vec::new();
        rook_targets(&Board::empty(), Position::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_stops_before_friend_and_on_enemy() {
        let mut board = Board::empty();
        board.set(Position::new(4, 5), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Position::new(2, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        rook_targets(&board, Position::new(4, 3), Color::White, &mut out);

        assert!(out.contains(&Position::new(4, 4)));
        assert!(!out.contains(&Position::new(4, 5)));
        assert!(out.contains(&Position::new(2, 3)));
        assert!(!out.contains(&Position::new(1, 3)));
    }
}

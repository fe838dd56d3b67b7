//! Static position evaluation.
//!
//! The search delegates scoring to the `BoardScorer` trait so alternate
//! heuristics can be swapped without touching the search itself.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, state: &BoardState) -> i32;
}

/// Material of `for_color` minus material of its opponent
/// (pawn 1, knight 3, bishop 3, rook 5, queen 9, king 0).
pub fn evaluate(board: &Board, for_color: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece.kind.value();
            if piece.color == for_color {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, state: &BoardState) -> i32 {
        evaluate(&state.board, state.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_board_state;

    #[test]
    fn initial_material_is_balanced() {
        assert_eq!(evaluate(&Board::initial(), Color::White), 0);
        assert_eq!(evaluate(&Board::initial(), Color::Black), 0);
    }

    #[test]
    fn material_difference_is_signed_by_perspective() {
        // White: K, Q, R; black: K, N, 2P.
        let state = parse_board_state("4k3/pp6/8/3n4/8/8/8/R2QK3 w - - 0 1").expect("valid FEN");
        assert_eq!(evaluate(&state.board, Color::White), 14 - 5);
        assert_eq!(evaluate(&state.board, Color::Black), 5 - 14);
        assert_eq!(MaterialScorer.score(&state), 9);
    }
}

//! Full legal move generation pipeline.
//!
//! Enumerates pseudo-legal destinations per piece, plays each on a scratch
//! copy of the position and drops those that leave the mover's own king in
//! check. Legality is decided by simulation, never by pin geometry.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pseudo_legal_moves;

/// A legal move together with the position it produces.
#[derive(Debug, Clone, Copy)]
pub struct GeneratedMove {
    pub mv: Move,
    pub after: BoardState,
}

/// Legal destinations of the piece on `from`, whoever's turn it is.
pub fn legal_destinations(state: &BoardState, from: Position) -> Vec<Position> {
    let Some(piece) = state.board.piece_at(from) else {
        return Vec::new();
    };
    let state = state.with_side_to_move(piece.color);

    pseudo_legal_moves(&state, from)
        .into_iter()
        .filter(|&to| {
            play_move(&state, from, to)
                .is_some_and(|(after, _)| !is_king_in_check(&after.board, piece.color))
        })
        .collect()
}

/// Every legal move of `color` in board-scan order (row-major, then the
/// per-piece enumeration order).
pub fn generate_legal_moves(state: &BoardState, color: Color) -> Vec<GeneratedMove> {
    let state = state.with_side_to_move(color);
    let mut legal = Vec::with_capacity(48);

    for (from, _) in state.board.pieces_of(color) {
        for to in pseudo_legal_moves(&state, from) {
            let Some((after, mv)) = play_move(&state, from, to) else {
                continue;
            };
            // Illegal if own king is in check after move.
            if is_king_in_check(&after.board, color) {
                continue;
            }
            legal.push(GeneratedMove { mv, after });
        }
    }

    legal
}

/// `generate_legal_moves` without the resulting positions.
pub fn all_legal_moves(state: &BoardState, color: Color) -> Vec<Move> {
    generate_legal_moves(state, color)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}

/// Short-circuiting check for at least one legal move.
pub fn has_legal_move(state: &BoardState, color: Color) -> bool {
    let state = state.with_side_to_move(color);
    for (from, _) in state.board.pieces_of(color) {
        let escapes = pseudo_legal_moves(&state, from).into_iter().any(|to| {
            play_move(&state, from, to)
                .is_some_and(|(after, _)| !is_king_in_check(&after.board, color))
        });
        if escapes {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position;
    use crate::utils::fen_parser::parse_board_state;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("valid square")
    }

    fn state(fen: &str) -> BoardState {
        parse_board_state(fen).expect("valid test FEN")
    }

    #[test]
    fn initial_position_has_twenty_moves() {
        let moves = all_legal_moves(&BoardState::initial(), Color::White);
        assert_eq!(moves.len(), 20);
        let pawn_moves = moves.iter().filter(|m| m.piece.kind == PieceKind::Pawn).count();
        let knight_moves = moves.iter().filter(|m| m.piece.kind == PieceKind::Knight).count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);

        assert_eq!(all_legal_moves(&BoardState::initial(), Color::Black).len(), 20);
    }

    #[test]
    fn generation_order_is_board_scan_order() {
        let moves = all_legal_moves(&BoardState::initial(), Color::White);
        let origins: Vec<Position> = moves.iter().map(|m| m.from).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
        assert_eq!(moves[0].from, sq("a2"));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let s = state("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1");
        assert!(legal_destinations(&s, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let s = state("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1");
        let dests = legal_destinations(&s, sq("e1"));
        assert!(!dests.contains(&sq("d1")));
        assert!(!dests.contains(&sq("d2")));
        assert!(dests.contains(&sq("f2")));
    }

    #[test]
    fn only_moves_resolving_check_are_legal() {
        // Queen on e7 checks the king on e1; the knight can only interpose.
        let s = state("6k1/4q3/8/8/8/2N5/8/4K3 w - - 0 1");
        let knight = legal_destinations(&s, sq("c3"));
        assert_eq!(knight, vec![sq("e4"), sq("e2")]);
    }

    #[test]
    fn no_legal_move_leaves_own_king_in_check() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1",
        ] {
            let s = state(fen);
            let color = s.side_to_move;
            for generated in generate_legal_moves(&s, color) {
                assert!(!is_king_in_check(&generated.after.board, color), "{fen}: {:?}", generated.mv);
            }
        }
    }

    #[test]
    fn opponent_replies_never_capture_a_king() {
        let s = state("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for generated in generate_legal_moves(&s, Color::White) {
            for reply in all_legal_moves(&generated.after, Color::Black) {
                assert_ne!(reply.captured_piece.map(|p| p.kind), Some(PieceKind::King));
            }
        }
    }

    #[test]
    fn en_passant_capture_is_offered_after_double_push() {
        let start = state("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        let (after_push, _) = play_move(&start, sq("e2"), sq("e4")).expect("pawn on e2");
        assert_eq!(after_push.en_passant_target, Some(sq("e3")));

        let dests = legal_destinations(&after_push, sq("d4"));
        assert!(dests.contains(&sq("e3")));

        let ep = all_legal_moves(&after_push, Color::Black)
            .into_iter()
            .find(|m| m.is_en_passant)
            .expect("en passant generated");
        assert_eq!(ep.to, sq("e3"));
    }

    #[test]
    fn has_legal_move_agrees_with_generation() {
        let stalemate = state("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!has_legal_move(&stalemate, Color::Black));
        assert!(all_legal_moves(&stalemate, Color::Black).is_empty());
        assert!(has_legal_move(&BoardState::initial(), Color::White));
    }
}

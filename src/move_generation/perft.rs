//! Leaf-node counting over the legal move generator.
//!
//! Used to validate generation against published node counts. Only
//! positions whose trees contain no promotions match the published numbers,
//! since every promotion here is a queen.

use std::thread;

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_legal_move, GeneratedMove,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(state: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generate_legal_moves(state, state.side_to_move) {
        perft_recurse(&generated, depth, 1, &mut total);
    }
    total
}

/// Same count with one scoped thread per root move.
pub fn perft_multi_threaded(state: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(state, depth);
    }

    let root_moves = generate_legal_moves(state, state.side_to_move);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|generated| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generated, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse(
    generated: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        count_leaf(generated, counts);
        return;
    }

    let after = &generated.after;
    for child in generate_legal_moves(after, after.side_to_move) {
        perft_recurse(&child, search_depth, current_depth + 1, counts);
    }
}

fn count_leaf(generated: &GeneratedMove, counts: &mut PerftCounts) {
    let mv = &generated.mv;
    counts.nodes += 1;

    if mv.captured_piece.is_some() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castling {
        counts.castles += 1;
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }

    let defender: Color = generated.after.side_to_move;
    if is_king_in_check(&generated.after.board, defender) {
        counts.checks += 1;
        if !has_legal_move(&generated.after, defender) {
            counts.checkmates += 1;
        }
    }
}

//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Written in negamax form: every node scores the position for its own
//! side to move, so the maximizing layer is always the searching color and
//! a mated side always sees a large negative score. Positions are explored
//! on copies of a `BoardState`; the caller's game is never touched.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::MATE_SCORE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root, the root move included.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Best move for `color` in `state`, ties going to the earliest move in
/// generation order.
pub fn minimax_search<S: BoardScorer>(
    state: &BoardState,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let root = state.with_side_to_move(color);
    let mut nodes = 1u64;

    let moves = generate_legal_moves(&root, color);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: terminal_score(&root, 0),
            nodes,
        };
    }
    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(&root),
            nodes,
        };
    }

    let mut alpha = -MATE_SCORE;
    let beta = MATE_SCORE;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE - 1;

    for generated in moves {
        let score = -negamax(
            &generated.after,
            scorer,
            config.max_depth - 1,
            -beta,
            -alpha,
            1,
            &mut nodes,
        );

        if score > best_score {
            best_score = score;
            best_move = Some(generated.mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

fn negamax<S: BoardScorer>(
    state: &BoardState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        // Terminal positions must dominate material even at the horizon.
        if !has_legal_move(state, state.side_to_move) {
            return terminal_score(state, ply);
        }
        return scorer.score(state);
    }

    let moves = generate_legal_moves(state, state.side_to_move);
    if moves.is_empty() {
        return terminal_score(state, ply);
    }

    let mut best = -MATE_SCORE;
    for generated in moves {
        let score = -negamax(
            &generated.after,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            ply.saturating_add(1),
            nodes,
        );

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Mated: large negative (nearer mates are worse). Stalemated: zero.
fn terminal_score(state: &BoardState, ply: u8) -> i32 {
    if is_king_in_check(&state.board, state.side_to_move) {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}

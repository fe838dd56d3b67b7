//! Crate root module declarations for the Parlor Chess engine.
//!
//! The module tree mirrors the layers of the engine: the board model and
//! game state, per-piece movement patterns, legal move generation with the
//! attack oracle, material search and the difficulty-tiered engines. The
//! free functions below are the surface a UI drives a game through.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use engines::difficulty::{choose_move, choose_move_with_rng};
pub use game_state::board::Board;
pub use game_state::chess_types::{
    CastlingRights, Color, Difficulty, FenClocks, GameStatus, Move, Piece, PieceKind, Position,
};
pub use game_state::game_state::{CapturedPieces, GameState};

use game_state::game_status::classify_board_state;
use move_generation::legal_move_checks::is_king_in_check;

/// A new game in the standard starting position, white to move.
pub fn create_initial_state() -> GameState {
    GameState::new_game()
}

/// Legal destinations for the piece on `from`; empty when it is not that
/// piece's turn.
pub fn legal_moves(game_state: &GameState, from: Position) -> Vec<Position> {
    game_state.legal_moves(from)
}

/// Play `from -> to`, returning the successor state. The input is untouched.
pub fn apply_move(game_state: &GameState, from: Position, to: Position) -> ChessResult<GameState> {
    game_state.apply_move(from, to)
}

pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.board, color)
}

/// Status of the position for the side to move.
pub fn classify(game_state: &GameState) -> GameStatus {
    classify_board_state(&game_state.board_state())
}

/// Every legal move `color` has in the position, regardless of whose turn it is.
pub fn all_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    move_generation::legal_move_generator::all_legal_moves(&game_state.board_state(), color)
}

pub fn is_square_attacked(game_state: &GameState, square: Position, by_color: Color) -> bool {
    move_generation::legal_move_checks::is_square_attacked(&game_state.board, square, by_color)
}

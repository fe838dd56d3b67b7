//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Rule violations
//! surface as `InvalidMove`; the text-facing helpers (FEN, coordinates,
//! difficulty names) report what they could not parse.
//!
//! Check detection never returns an error for a malformed board: a missing
//! king simply means "not in check". `NoKingFound` is only raised when a
//! caller explicitly imports a position and asks for it to be validated.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The destination is not in the legal-move set of the origin square.
    ///
    /// Covers an empty origin, moving out of turn, moving into check, moving
    /// after a mate and every other rule violation.
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Position, to: Position },

    /// An imported board lacks a king (or holds several) for one side.
    #[error("board does not contain exactly one {0} king")]
    NoKingFound(Color),

    /// A FEN string was malformed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A coordinate such as `e4` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("unknown difficulty: {0} (expected easy, medium or hard)")]
    InvalidDifficulty(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

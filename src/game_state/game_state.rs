//! Game-level state: the position plus everything a UI or persistence layer
//! wants to know about the game so far.
//!
//! `GameState` is never mutated in place by the engine. `apply_move` derives
//! a brand-new value from the previous one, so a caller can keep the old
//! state for undo or replay.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::classify_board_state;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_generator::legal_destinations;

/// Pieces each side has lost, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Files `piece` under its own color.
    pub fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub move_history: Vec<Move>,
    pub captured_pieces: CapturedPieces,
    pub en_passant_target: Option<Position>,
    pub castling_rights: CastlingRights,
    #[serde(default)]
    pub starting_clocks: FenClocks,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, all castling rights, empty history.
    pub fn new_game() -> Self {
        Self::from_board_state(BoardState::initial())
    }

    /// Fresh game (empty history) starting from an arbitrary position.
    pub fn from_board_state(state: BoardState) -> Self {
        let status = classify_board_state(&state);
        let winner = (status == GameStatus::Checkmate).then(|| state.side_to_move.opposite());
        Self {
            board: state.board,
            side_to_move: state.side_to_move,
            status,
            winner,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            en_passant_target: state.en_passant_target,
            castling_rights: state.castling_rights,
            starting_clocks: FenClocks::default(),
        }
    }

    /// Scratch copy of the rule-relevant part of the game.
    #[inline]
    pub fn board_state(&self) -> BoardState {
        BoardState {
            board: self.board,
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
        }
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.piece_at(pos)
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on
    /// turn. A mated or stalemated side has no legal moves anyway, while a
    /// drawn position still lists them.
    pub fn legal_moves(&self, from: Position) -> Vec<Position> {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {
                legal_destinations(&self.board_state(), from)
            }
            _ => Vec::new(),
        }
    }

    /// Play `from -> to` and return the resulting game.
    pub fn apply_move(&self, from: Position, to: Position) -> ChessResult<GameState> {
        if !self.legal_moves(from).contains(&to) {
            debug!("rejected move {from}{to} for {} ({})", self.side_to_move, self.status);
            return Err(ChessError::InvalidMove { from, to });
        }

        let (after, mv) =
            play_move(&self.board_state(), from, to).ok_or(ChessError::InvalidMove { from, to })?;

        let mut next = self.clone();
        next.board = after.board;
        next.side_to_move = after.side_to_move;
        next.en_passant_target = after.en_passant_target;
        next.castling_rights = after.castling_rights;

        if let Some(captured) = mv.captured_piece {
            next.captured_pieces.push(captured);
        }

        next.status = classify_board_state(&after);
        next.winner = (next.status == GameStatus::Checkmate).then_some(mv.piece.color);
        next.move_history.push(mv);

        trace!(
            "{} played {from}{to}; status {}",
            mv.piece.color,
            next.status
        );

        Ok(next)
    }

    /// Re-validate and apply a `Move` previously produced by the engine.
    pub fn apply_generated_move(&self, mv: &Move) -> ChessResult<GameState> {
        let on_board = self.board.piece_at(mv.from);
        if on_board != Some(mv.piece) {
            return Err(ChessError::InvalidMove {
                from: mv.from,
                to: mv.to,
            });
        }
        self.apply_move(mv.from, mv.to)
    }

    /// Most recent move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }
}

//! 8x8 mailbox board.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement, every piece unmoved.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.squares[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[Color::Black.home_row() as usize][col] =
                Some(Piece::new(BACK_RANK_ORDER[col], Color::Black));
            board.squares[Color::White.home_row() as usize][col] =
                Some(Piece::new(BACK_RANK_ORDER[col], Color::White));
        }
        board
    }

    /// Piece on `pos`, or `None` for empty and off-board squares.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Overwrite `pos`. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    /// Remove and return whatever stands on `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.piece_at(pos);
        self.set(pos, None);
        piece
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Row-major scan for `color`'s king.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}

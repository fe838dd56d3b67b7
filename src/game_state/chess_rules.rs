//! Canonical chess-rule constants.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: i8 = 4;
pub const KING_SIDE_ROOK_COL: i8 = 7;
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;

/// Column the king lands on when castling king-side.
pub const KING_SIDE_CASTLE_COL: i8 = 6;
/// Column the king lands on when castling queen-side.
pub const QUEEN_SIDE_CASTLE_COL: i8 = 2;

/// Score of a position whose side to move has been mated.
pub const MATE_SCORE: i32 = 10_000;

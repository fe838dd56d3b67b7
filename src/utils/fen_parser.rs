//! FEN-to-GameState parser.
//!
//! Reads board layout, side to move, castling rights and the en-passant
//! square. The two clock fields are kept on the game so that writing the
//! FEN back reproduces them. `has_moved` is inferred: a piece on one of its starting squares is
//! taken as unmoved, anything else as moved.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_position;

/// Parse a full game (status classified, empty history).
pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let (state, clocks) = parse_fen_fields(fen)?;
    let mut game = GameState::from_board_state(state);
    game.starting_clocks = clocks;
    Ok(game)
}

/// Rule-relevant part of a FEN; the clocks are validated and dropped.
pub fn parse_board_state(fen: &str) -> ChessResult<BoardState> {
    parse_fen_fields(fen).map(|(state, _)| state)
}

fn parse_fen_fields(fen: &str) -> ChessResult<(BoardState, FenClocks)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let clocks = FenClocks {
        halfmove: halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("halfmove clock {halfmove_part}")))?,
        fullmove: fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("fullmove number {fullmove_part}")))?,
    };

    let board = parse_board(board_part)?;
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(ChessError::NoKingFound(color));
        }
    }

    let state = BoardState {
        board,
        side_to_move: parse_side_to_move(side_part)?,
        en_passant_target: parse_en_passant_square(en_passant_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
    };
    Ok((state, clocks))
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }

            let pos = Position::new(row as i8, col as i8);
            let piece = Piece::new(kind, color);
            let piece = if on_starting_square(piece, pos) {
                piece
            } else {
                piece.moved()
            };
            board.set(pos, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn on_starting_square(piece: Piece, pos: Position) -> bool {
    if piece.kind == PieceKind::Pawn {
        return pos.row == piece.color.pawn_start_row() as i8;
    }
    pos.row == piece.color.home_row() as i8 && BACK_RANK_ORDER[pos.col as usize] == piece.kind
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side-to-move field {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(&format!("castling rights character {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Position>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_position(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("en-passant square {en_passant_part}")))
}

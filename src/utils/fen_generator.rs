//! GameState-to-FEN writer.
//!
//! The clock fields continue from the game's starting clocks: the halfmove
//! clock counts plies since the last pawn move or capture, the fullmove
//! number advances after every black move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |pos| pos.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock(&game_state.move_history, game_state.starting_clocks),
        fullmove_number(&game_state.move_history, game_state.starting_clocks),
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8 {
        let mut empty_count = 0u8;

        for col in 0..8 {
            match board.piece_at(Position::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.white_king_side {
        out.push('K');
    }
    if rights.white_queen_side {
        out.push('Q');
    }
    if rights.black_king_side {
        out.push('k');
    }
    if rights.black_queen_side {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn halfmove_clock(history: &[Move], start: FenClocks) -> usize {
    let quiet = history
        .iter()
        .rev()
        .take_while(|mv| mv.piece.kind != PieceKind::Pawn && mv.captured_piece.is_none())
        .count();
    if quiet == history.len() {
        usize::from(start.halfmove) + quiet
    } else {
        quiet
    }
}

fn fullmove_number(history: &[Move], start: FenClocks) -> usize {
    let black_moves = history
        .iter()
        .filter(|mv| mv.piece.color == Color::Black)
        .count();
    usize::from(start.fullmove) + black_moves
}

//! Conversions between board coordinates and algebraic text.
//!
//! Squares are written `a1`..`h8`; moves use long algebraic notation
//! (`e2e4`, `e7e8q` for a promotion), which is what the move list shows.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Convert long algebraic notation (for example: "e4") to a `Position`.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Position::new((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Convert a `Position` to algebraic notation. Off-board positions fail.
pub fn position_to_algebraic(pos: Position) -> ChessResult<String> {
    if !pos.is_valid() {
        return Err(ChessError::InvalidSquare(format!("({},{})", pos.row, pos.col)));
    }
    Ok(pos.to_string())
}

/// Long algebraic text of an engine-produced move.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = format!("{}{}", mv.from, mv.to);
    if let Some(kind) = mv.promotion_kind {
        out.push(kind.letter());
    }
    out
}

/// Split `"e2e4"` (a trailing promotion letter is accepted and ignored,
/// promotion is always to a queen) into its two squares.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Position, Position)> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    if text.len() == 5 && PieceKind::from_letter(text.as_bytes()[4] as char).is_none() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    Ok((from, to))
}

/// Numbered move list, e.g. `1. e2e4 e7e5 2. g1f3`.
pub fn format_move_list(moves: &[Move]) -> String {
    let mut out = String::new();
    let black_first = moves.first().is_some_and(|mv| mv.piece.color == Color::Black);
    if black_first {
        out.push_str("1... ");
    }

    for (index, mv) in moves.iter().enumerate() {
        let ply = index + usize::from(black_first);
        if ply % 2 == 0 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("{}. ", ply / 2 + 1));
        } else if index > 0 {
            out.push(' ');
        }
        out.push_str(&move_to_long_algebraic(mv));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn corner_squares_map_to_rows_and_columns() {
        assert_eq!(algebraic_to_position("a8").ok(), Some(Position::new(0, 0)));
        assert_eq!(algebraic_to_position("h1").ok(), Some(Position::new(7, 7)));
        assert_eq!(algebraic_to_position("e2").ok(), Some(Position::new(6, 4)));
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "i1", "a9", "a0", "e22"] {
            assert!(algebraic_to_position(bad).is_err(), "{bad}");
        }
        assert!(position_to_algebraic(Position::new(8, 0)).is_err());
    }

    #[test]
    fn long_algebraic_parsing() {
        let (from, to) = parse_long_algebraic("e2e4").expect("valid move text");
        assert_eq!(from.to_string(), "e2");
        assert_eq!(to.to_string(), "e4");
        assert!(parse_long_algebraic("e7e8q").is_ok());
        assert!(parse_long_algebraic("e7e8x").is_err());
        assert!(parse_long_algebraic("e2").is_err());
    }

    #[test]
    fn move_list_is_numbered_by_full_move() {
        let sq = |s: &str| algebraic_to_position(s).expect("valid square");
        let game = GameState::new_game()
            .apply_move(sq("e2"), sq("e4"))
            .and_then(|g| g.apply_move(sq("e7"), sq("e5")))
            .and_then(|g| g.apply_move(sq("g1"), sq("f3")))
            .expect("legal opening");

        assert_eq!(format_move_list(&game.move_history), "1. e2e4 e7e5 2. g1f3");
        assert_eq!(format_move_list(&[]), "");
    }
}

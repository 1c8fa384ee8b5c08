//! FEN (Forsyth-Edwards Notation) placement parsing.
//!
//! Only the piece placement and the active color are meaningful to this
//! rule set. Castling, en passant, and clock fields may be present and are
//! ignored.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
///
/// Holds the validated placement string and the side to move. The engine
/// turns this into its board through [`FenParser::pieces`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Side to move; White when the field is omitted.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts.get(1) {
            None => Color::White,
            Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    squares += digit;
                } else if Piece::from_fen_char(c).is_some() {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    /// Returns every occupied square with its piece, in row-major order.
    ///
    /// The first FEN rank is row 0 (Black's back rank).
    pub fn pieces(&self) -> Vec<(Square, Piece, Color)> {
        let mut pieces = Vec::new();
        for (row, rank_str) in self.piece_placement.split('/').enumerate() {
            let mut col = 0i8;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as i8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::from_coords(col, row as i8) {
                        pieces.push((sq, piece, color));
                    }
                    col += 1;
                }
            }
        }
        pieces
    }
}

impl Default for FenParser {
    fn default() -> Self {
        FenParser {
            piece_placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".to_string(),
            active_color: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen, FenParser::default());
        assert_eq!(fen.pieces().len(), 32);
    }

    #[test]
    fn parse_placement_only() {
        let fen = FenParser::parse("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(
            fen.pieces(),
            vec![
                (Square::H8, Piece::King, Color::Black),
                (Square::from_algebraic("f7").unwrap(), Piece::Queen, Color::White),
                (Square::from_algebraic("g6").unwrap(), Piece::King, Color::White),
            ]
        );
    }

    #[test]
    fn parse_side_to_move() {
        let fen = FenParser::parse("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
        assert_eq!(fen.active_color, Color::Black);
        let fen = FenParser::parse("7k/5Q2/6K1/8/8/8/8/8 b KQkq e3 0 1").unwrap();
        assert_eq!(fen.active_color, Color::Black);
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            FenParser::parse(""),
            Err(FenError::InvalidPartCount(0))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(7);
        assert!(format!("{}", err).contains("7"));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::InvalidPiecePlacement("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}

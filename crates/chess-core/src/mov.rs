//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// A chess move: source, destination, and an optional promotion piece.
///
/// Encoded compactly: 6 bits from, 6 bits to, 4 bits promotion = 16 bits total.
/// The promotion nibble is 0 for none, otherwise `Piece::index()` + 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        let promo = match promotion {
            Some(piece) => piece as u16 + 1,
            None => 0,
        };
        let encoded = (from.index() as u16) | ((to.index() as u16) << 6) | (promo << 12);
        Move(encoded)
    }

    /// Creates a move without a promotion piece.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        match self.0 >> 12 {
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Returns a copy of this move carrying the given promotion piece.
    #[inline]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Self::new(self.from(), self.to(), Some(piece))
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion() {
            Some(piece) => format!("{}{}{}", self.from(), self.to(), piece.to_char()),
            None => format!("{}{}", self.from(), self.to()),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Only knight, bishop, rook, and queen are accepted as promotion letters.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s.chars().nth(4) {
            Some(c) => {
                let piece = Piece::from_char(c)?;
                if !piece.is_promotion_target() {
                    return None;
                }
                Some(piece)
            }
            None => None,
        };
        Some(Move::new(from, to, promotion))
    }

    /// A null move (a8a8), used as a placeholder; never generated.
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

//! Board square representation.

use std::fmt;

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed row-major from Black's back rank:
/// - a8 = (0, 0) = 0, h8 = (7, 0) = 7
/// - a1 = (0, 7) = 56, h1 = (7, 7) = 63
///
/// A `Square` is always on the board; off-board arithmetic goes through
/// [`Square::from_coords`] or [`Square::offset`], which return `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from column and row, or `None` if off the board.
    #[inline]
    pub const fn from_coords(x: i8, y: i8) -> Option<Self> {
        if Self::contains(x, y) {
            Some(Square((y * 8 + x) as u8))
        } else {
            None
        }
    }

    /// Returns true if `(x, y)` lies on the board.
    #[inline]
    pub const fn contains(x: i8, y: i8) -> bool {
        x >= 0 && x < 8 && y >= 0 && y < 8
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::from_coords((file - b'a') as i8, (b'8' - rank) as i8)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn x(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Returns the row (0-7); row 0 is Black's back rank.
    #[inline]
    pub const fn y(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Returns the square `(dx, dy)` away, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_coords(self.x() + dx, self.y() + dy)
    }

    /// File letter, `'a'` for column 0.
    pub const fn file_char(self) -> char {
        (b'a' + self.0 % 8) as char
    }

    /// Rank digit, `'8'` for row 0.
    pub const fn rank_char(self) -> char {
        (b'8' - self.0 / 8) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    // Common squares
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

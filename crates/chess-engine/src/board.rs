//! Mailbox board representation.

use std::fmt;

use chess_core::{Color, ColoredPiece, FenError, FenParser, Piece, Square};

use crate::EngineError;

/// Back rank layout from the a-file to the h-file.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 grid of squares, indexed `[row][col]`.
///
/// Row 0 is Black's back rank and row 7 is White's. An empty square holds
/// `None`. The board owns all placement state; it does not know whose turn
/// it is.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board holding the standard starting layout.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_initial_position();
        board
    }

    /// Clears the board and places the standard 32-piece layout.
    pub fn setup_initial_position(&mut self) {
        *self = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, piece) in BACK_RANK.iter().enumerate() {
                self.squares[back][col] = Some(ColoredPiece::new(*piece, color));
                self.squares[pawns][col] = Some(ColoredPiece::new(Piece::Pawn, color));
            }
        }
    }

    /// Builds a board from a FEN string. Only the placement is used.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_parsed(&parsed))
    }

    /// Builds a board from already parsed FEN data.
    pub fn from_parsed(parsed: &FenParser) -> Self {
        let mut board = Board::empty();
        for (sq, piece, color) in parsed.pieces() {
            board.set(sq, Some(ColoredPiece::new(piece, color)));
        }
        board
    }

    /// Returns the FEN piece placement field for this board.
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::new();
        for (row, cells) in self.squares.iter().enumerate() {
            let mut empty_count = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    /// Returns true if `(x, y)` is on the board.
    #[inline]
    pub const fn is_inside_board(x: i8, y: i8) -> bool {
        Square::contains(x, y)
    }

    /// Returns true if the square at `(x, y)` exists and holds no piece.
    #[inline]
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        Square::from_coords(x, y).is_some_and(|sq| self.is_empty(sq))
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `(x, y)` holds a piece not of `color`.
    ///
    /// Off-board and empty squares answer `false`.
    #[inline]
    pub fn is_opponent_piece(&self, x: i8, y: i8, color: Color) -> bool {
        self.color_at(x, y).is_some_and(|c| c != color)
    }

    /// Returns true if `(x, y)` holds a piece of `color`.
    ///
    /// Off-board and empty squares answer `false`.
    #[inline]
    pub fn is_friendly_piece(&self, x: i8, y: i8, color: Color) -> bool {
        self.color_at(x, y) == Some(color)
    }

    #[inline]
    fn color_at(&self, x: i8, y: i8) -> Option<Color> {
        let sq = Square::from_coords(x, y)?;
        self.piece_at(sq).map(|p| p.color)
    }

    /// Returns the piece on the square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.y() as usize][sq.x() as usize]
    }

    /// Returns a mutable handle to the square's contents.
    #[inline]
    pub fn piece_at_mut(&mut self, sq: Square) -> &mut Option<ColoredPiece> {
        &mut self.squares[sq.y() as usize][sq.x() as usize]
    }

    /// Overwrites the square's contents.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<ColoredPiece>) {
        *self.piece_at_mut(sq) = piece;
    }

    /// Removes and returns the square's contents.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.piece_at_mut(sq).take()
    }

    /// Iterates over every occupied square of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Finds the king of `color` by linear scan.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(Piece::King, color))
        })
    }

    /// Finds the king of `color`, reporting its absence as an error.
    ///
    /// Kings are never captured, so a missing king means the board was
    /// set up or mutated incorrectly.
    pub fn king_square(&self, color: Color) -> Result<Square, EngineError> {
        self.find_king(color).ok_or(EngineError::MissingKing(color))
    }

    /// Sums the material value of every piece of `color`.
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|(_, p)| p.piece.value()).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', |p| p.to_fen_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}

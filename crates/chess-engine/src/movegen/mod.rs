//! Move generation.
//!
//! Destinations are generated per piece by stepping over the mailbox board.
//! Everything here is pseudo-legal: a move may leave the mover's own king in
//! check. [`generate_legal_moves`] applies the self-check filter on top.

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Color, ColoredPiece, Move, Piece, Square};

pub use attacks::{is_in_check, is_square_attacked, is_square_attacked_at};

/// Rook directions.
const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop directions.
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen and king directions: orthogonals first, then diagonals.
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during search.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves the list can hold.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if a move with the same source and destination is listed.
    pub fn contains_squares(&self, from: Square, to: Square) -> bool {
        self.as_slice()
            .iter()
            .any(|m| m.from() == from && m.to() == to)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Keeps only the moves for which `f` returns true, in order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut kept = 0;
        for i in 0..self.len {
            let m = self.moves[i];
            if f(&m) {
                self.moves[kept] = m;
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the pseudo-legal destinations of `piece` standing on `from`.
///
/// The piece does not have to be on the board; only its type and color are
/// used. Destinations are always on the board and never hold a piece of
/// the same color.
pub fn legal_destinations(board: &Board, piece: ColoredPiece, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    destinations_into(board, piece, from, &mut out);
    out
}

/// Appends the pseudo-legal destinations of `piece` on `from` to `out`.
pub fn destinations_into(board: &Board, piece: ColoredPiece, from: Square, out: &mut Vec<Square>) {
    match piece.piece {
        Piece::Pawn => pawn_destinations(board, piece.color, from, out),
        Piece::Knight => step_destinations(board, piece.color, from, &KNIGHT_OFFSETS, out),
        Piece::Bishop => ray_destinations(board, piece.color, from, &DIAGONAL, out),
        Piece::Rook => ray_destinations(board, piece.color, from, &ORTHOGONAL, out),
        Piece::Queen => ray_destinations(board, piece.color, from, &ALL_DIRECTIONS, out),
        Piece::King => step_destinations(board, piece.color, from, &ALL_DIRECTIONS, out),
    }
}

/// Pawn pushes and diagonal captures. No en passant.
fn pawn_destinations(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();
    let (x, y) = (from.x(), from.y());

    if let Some(one) = from.offset(0, dir).filter(|&sq| board.is_empty(sq)) {
        out.push(one);
        if y == color.pawn_start_row() as i8 {
            if let Some(two) = from.offset(0, 2 * dir).filter(|&sq| board.is_empty(sq)) {
                out.push(two);
            }
        }
    }

    for dx in [-1, 1] {
        if board.is_opponent_piece(x + dx, y + dir, color) {
            if let Some(target) = from.offset(dx, dir) {
                out.push(target);
            }
        }
    }
}

/// Single-step pieces: every offset that lands on the board and not on a
/// friendly piece.
fn step_destinations(
    board: &Board,
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dx, dy) in offsets {
        if let Some(target) = from.offset(dx, dy) {
            if !board.is_friendly_piece(target.x(), target.y(), color) {
                out.push(target);
            }
        }
    }
}

/// Sliding pieces: each ray runs until the edge, stops before a friendly
/// piece, and stops on (including) an enemy piece.
fn ray_destinations(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dx, dy) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dx, dy) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Generates every pseudo-legal move for `color`.
///
/// Squares are visited row by row from Black's back rank; each piece's
/// destinations keep their generation order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces(color) {
        targets.clear();
        destinations_into(board, piece, from, &mut targets);
        for &to in &targets {
            moves.push(Move::normal(from, to));
        }
    }
    moves
}

/// Generates every legal move for `color`: pseudo-legal moves that do not
/// leave `color`'s king attacked.
///
/// Each candidate is tried on the board and taken back before the next one,
/// so the board is unchanged on return.
pub fn generate_legal_moves(board: &mut Board, color: Color) -> MoveList {
    let mut moves = pseudo_legal_moves(board, color);
    let king = board.find_king(color);
    moves.retain(|m| board.keeps_king_safe(m.from(), m.to(), color, king));
    moves
}

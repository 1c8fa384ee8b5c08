//! Move execution on the shared board.
//!
//! Two layers live here. [`Board::apply_with_capture`] and [`Board::undo`]
//! are raw exact inverses used by search and legality checks: no bounds
//! checks, no rule checks. [`Board::commit_move`] and [`Board::promote`] are
//! the validated path used by the game facade.
//!
//! Hypothetical moves should go through [`Board::scoped_move`], which undoes
//! the move when the guard is dropped, so every apply is paired with an
//! undo on every exit path.

use std::ops::{Deref, DerefMut};

use chess_core::{Color, ColoredPiece, Move, Piece, Square};
use tracing::debug;

use crate::movegen::{is_in_check, is_square_attacked};
use crate::{Board, EngineError};

/// A move applied to a board that is taken back on drop.
///
/// Derefs to the board in its post-move state.
#[must_use = "the move is undone as soon as the guard is dropped"]
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    captured: Option<ColoredPiece>,
}

impl MoveGuard<'_> {
    /// The piece that stood on the destination before the move.
    #[inline]
    pub fn captured(&self) -> Option<ColoredPiece> {
        self.captured
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo(self.from, self.to, self.captured);
    }
}

impl Board {
    /// Moves whatever is on `from` to `to` and returns the previous
    /// occupant of `to`.
    ///
    /// `from` is left empty. No legality checks are made.
    #[inline]
    pub fn apply_with_capture(&mut self, from: Square, to: Square) -> Option<ColoredPiece> {
        let mover = self.take(from);
        std::mem::replace(self.piece_at_mut(to), mover)
    }

    /// Reverses [`apply_with_capture`](Self::apply_with_capture).
    ///
    /// The mover goes back to `from` and `captured` is written to `to`.
    #[inline]
    pub fn undo(&mut self, from: Square, to: Square, captured: Option<ColoredPiece>) {
        let mover = std::mem::replace(self.piece_at_mut(to), captured);
        self.set(from, mover);
    }

    /// Applies a move that is undone when the returned guard drops.
    #[inline]
    pub fn scoped_move(&mut self, from: Square, to: Square) -> MoveGuard<'_> {
        let captured = self.apply_with_capture(from, to);
        MoveGuard {
            board: self,
            from,
            to,
            captured,
        }
    }

    /// Returns true if moving `from` to `to` leaves `color`'s king safe.
    ///
    /// The board is unchanged on return. Promotion is not resolved; the
    /// promotion piece cannot affect the mover's own king.
    pub fn simulate_move(&mut self, from: Square, to: Square, color: Color) -> bool {
        let after = self.scoped_move(from, to);
        !is_in_check(&after, color)
    }

    /// Like [`simulate_move`](Self::simulate_move) with the king square
    /// supplied by the caller.
    ///
    /// If the moving piece is the king itself, `to` is used as the king
    /// square. A missing king is never attacked.
    pub fn keeps_king_safe(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
        king: Option<Square>,
    ) -> bool {
        let king = if king == Some(from) { Some(to) } else { king };
        let after = self.scoped_move(from, to);
        match king {
            Some(king) => !is_square_attacked(&after, king, color),
            None => true,
        }
    }

    /// Plays a move for the piece on `from`, rejecting it if it leaves the
    /// mover in check.
    ///
    /// On success the moved piece is marked as moved and the captured piece
    /// (if any) is returned. On failure the board is restored. Pawns reaching
    /// the last row get the same self-check test as every other move.
    /// Destination legality is not checked here; callers filter against the
    /// generated destinations first.
    pub fn commit_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<Option<ColoredPiece>, EngineError> {
        let mv = Move::normal(from, to);
        let color = match self.piece_at(from) {
            Some(piece) => piece.color,
            None => return Err(EngineError::IllegalMove(mv)),
        };

        let captured = self.apply_with_capture(from, to);
        if is_in_check(self, color) {
            self.undo(from, to, captured);
            debug!(%mv, %color, "rejected move leaving king in check");
            return Err(EngineError::IllegalMove(mv));
        }

        if let Some(piece) = self.piece_at_mut(to) {
            piece.has_moved = true;
        }
        Ok(captured)
    }

    /// Returns true if `sq` holds a pawn standing on its promotion row.
    pub fn needs_promotion(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(|p| {
            p.piece == Piece::Pawn && sq.y() == p.color.promotion_row() as i8
        })
    }

    /// Replaces the pawn on `sq` with `piece` of the same color.
    pub fn promote(&mut self, sq: Square, piece: Piece) -> Result<(), EngineError> {
        if !piece.is_promotion_target() {
            return Err(EngineError::InvalidPromotion(piece));
        }
        if !self.needs_promotion(sq) {
            return Err(EngineError::NoPendingPromotion);
        }
        if let Some(pawn) = self.piece_at_mut(sq) {
            pawn.piece = piece;
        }
        Ok(())
    }
}

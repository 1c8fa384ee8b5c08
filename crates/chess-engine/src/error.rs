//! Error type for engine operations.

use crate::rules::GameStatus;
use chess_core::{Color, FenError, Move, Piece, Square};
use thiserror::Error;

/// Errors reported by mutating engine operations.
///
/// Queries never fail: they answer `false` or `None` for squares that are
/// off the board or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate outside the 8x8 board was supplied.
    #[error("coordinate ({x}, {y}) is off the board")]
    InvalidCoordinate { x: i8, y: i8 },

    /// The move is not playable, or it would leave the mover in check.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// A side has no king on the board.
    #[error("{0} has no king on the board")]
    MissingKing(Color),

    /// A pawn is waiting for its promotion piece.
    #[error("a promotion is pending and must be completed first")]
    PromotionPending,

    /// A promotion was supplied but no pawn is waiting for one.
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// Pawns promote only to queen, rook, bishop, or knight.
    #[error("cannot promote to {0}")]
    InvalidPromotion(Piece),

    /// The game has already ended.
    #[error("game is over: {0:?}")]
    GameOver(GameStatus),

    /// The side asked to move has nothing to play.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),
}

/// Converts raw coordinates into a square, rejecting off-board values.
pub fn square_at(x: i8, y: i8) -> Result<Square, EngineError> {
    Square::from_coords(x, y).ok_or(EngineError::InvalidCoordinate { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn square_at_bounds() {
        assert_eq!(square_at(0, 0), Ok(Square::A8));
        assert_eq!(square_at(7, 7), Ok(Square::H1));
        assert_eq!(
            square_at(8, 0),
            Err(EngineError::InvalidCoordinate { x: 8, y: 0 })
        );
        assert_eq!(
            square_at(0, -1),
            Err(EngineError::InvalidCoordinate { x: 0, y: -1 })
        );
    }

    #[test]
    fn error_display() {
        let err = EngineError::InvalidCoordinate { x: 9, y: 2 };
        assert!(err.to_string().contains("(9, 2)"));

        let err = EngineError::IllegalMove(Move::normal(Square::E1, Square::E8));
        assert!(err.to_string().contains("e1e8"));

        let err = EngineError::MissingKing(Color::Black);
        assert!(err.to_string().contains("Black"));

        let err = EngineError::InvalidPromotion(Piece::King);
        assert!(err.to_string().contains("King"));
    }

    #[test]
    fn fen_errors_convert_and_clone() {
        let err: EngineError = Board::from_fen("8/8/8/8/8/8/8/x7").unwrap_err().into();
        assert!(matches!(err, EngineError::Fen(FenError::InvalidPiecePlacement(_))));
        assert_eq!(err.clone(), err);
    }
}

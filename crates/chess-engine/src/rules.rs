//! Game state evaluation: checkmate and stalemate detection.
//!
//! The status is computed fresh from the board each time; nothing is
//! cached between plies.

use std::fmt;

use chess_core::Color;

use crate::movegen::{is_square_attacked, pseudo_legal_moves};
use crate::{Board, EngineError};

/// State of the game for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Playing,
    /// No legal moves and the king is attacked. The side to move has lost.
    Checkmate,
    /// No legal moves and the king is not attacked.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// Returns true if `color` has at least one move that keeps its king safe.
///
/// Stops at the first such move. The board is unchanged on return.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let king = board.find_king(color);
    pseudo_legal_moves(board, color)
        .as_slice()
        .iter()
        .any(|m| board.keeps_king_safe(m.from(), m.to(), color, king))
}

/// Evaluates the game state for `color` to move.
///
/// A board without `color`'s king is reported as
/// [`EngineError::MissingKing`].
pub fn game_status(board: &mut Board, color: Color) -> Result<GameStatus, EngineError> {
    let king = board.king_square(color)?;
    if has_legal_move(board, color) {
        return Ok(GameStatus::Playing);
    }
    if is_square_attacked(board, king, color) {
        Ok(GameStatus::Checkmate)
    } else {
        Ok(GameStatus::Stalemate)
    }
}

//! Attack detection.
//!
//! A square counts as attacked when it is among the pseudo-legal
//! destinations of some enemy piece. That includes pawn pushes onto an
//! empty target, which never matters for the occupied king square.

use super::destinations_into;
use crate::Board;
use chess_core::{Color, Square};

/// Returns true if any piece not of `defender` can move to `target`.
pub fn is_square_attacked(board: &Board, target: Square, defender: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, piece) in board.pieces(defender.opposite()) {
        targets.clear();
        destinations_into(board, piece, from, &mut targets);
        if targets.contains(&target) {
            return true;
        }
    }
    false
}

/// Coordinate form of [`is_square_attacked`].
///
/// Off-board coordinates are reported as not attacked.
pub fn is_square_attacked_at(board: &Board, x: i8, y: i8, defender: Color) -> bool {
    match Square::from_coords(x, y) {
        Some(target) => is_square_attacked(board, target, defender),
        None => false,
    }
}

/// Returns true if `color`'s king is attacked.
///
/// A board without that king is treated as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_position_has_no_checks() {
        let board = Board::new();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        assert!(!is_square_attacked(&board, Square::E1, Color::White));
    }

    #[test]
    fn slider_attacks() {
        let board = Board::from_fen("4k3/8/8/8/4r3/8/8/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, sq("a4"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));
    }

    #[test]
    fn blocked_slider_does_not_attack() {
        let board = Board::from_fen("4k3/8/8/8/4r3/8/4P3/4K3").unwrap();
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn knight_and_pawn_attacks() {
        let board = Board::from_fen("4k3/8/8/8/8/3n4/8/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));

        let board = Board::from_fen("4k3/8/8/8/8/8/3p4/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));

        // A pawn straight ahead does not give check.
        let board = Board::from_fen("4k3/8/8/8/8/8/4p3/4K3").unwrap();
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_push_squares_count_as_attacked() {
        let board = Board::from_fen("4k3/4p3/8/8/8/8/8/4K3").unwrap();
        assert!(is_square_attacked(&board, sq("e6"), Color::White));
        assert!(is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d6"), Color::White));
    }

    #[test]
    fn off_board_is_not_attacked() {
        let board = Board::new();
        assert!(!is_square_attacked_at(&board, -1, 0, Color::White));
        assert!(!is_square_attacked_at(&board, 0, 8, Color::Black));
        // f3 is (5, 5); White's own pieces do not count.
        assert!(!is_square_attacked_at(&board, 5, 5, Color::White));
        assert!(is_square_attacked_at(&board, 5, 5, Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::from_fen("8/8/8/8/4r3/8/8/8").unwrap();
        assert!(!is_in_check(&board, Color::White));
    }
}

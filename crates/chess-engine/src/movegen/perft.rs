//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Every node is visited on the same board through scoped make/unmake.

use super::generate_legal_moves;
use crate::Board;
use chess_core::Color;

/// Counts the number of leaf nodes at the given depth with `color` to move.
pub fn perft(board: &mut Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, color);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut after = board.scoped_move(m.from(), m.to());
        nodes += perft(&mut after, color.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide: the node count below each root move, sorted by UCI
/// text.
pub fn perft_divide(board: &mut Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board, color);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut after = board.scoped_move(m.from(), m.to());
        let nodes = if depth > 1 {
            perft(&mut after, color.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

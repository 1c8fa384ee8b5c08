//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the AI's point of view: the AI maximizes and its
//! opponent minimizes. The evaluation is pure material, so a side with no
//! legal moves scores the same as a quiet leaf.

use std::time::Instant;

use chess_core::{Color, Move};
use tracing::debug;

use crate::movegen::{generate_legal_moves, pseudo_legal_moves, MoveList};
use crate::Board;

/// Search depth used when the caller has no preference.
pub const DEFAULT_DEPTH: u32 = 3;

/// Material balance for `color`: its piece values minus the opponent's.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    board.material(color) - board.material(color.opposite())
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The highest scoring candidate; the first one found on ties.
    pub best_move: Move,
    /// Its minimax score.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Runs minimax searches and counts the nodes they visit.
///
/// The counter accumulates across calls; the root entry points report the
/// nodes of their own search in [`SearchResult::nodes`].
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Alpha-beta minimax from `ai_color`'s point of view.
    ///
    /// `maximizing` selects the side to move: the AI when true, its opponent
    /// otherwise. A node is a leaf when `depth` is zero or the side to move
    /// has no legal moves. The board is unchanged on return.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        ai_color: Color,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(board, ai_color);
        }

        let to_move = if maximizing {
            ai_color
        } else {
            ai_color.opposite()
        };
        let moves = generate_legal_moves(board, to_move);
        if moves.is_empty() {
            return evaluate(board, ai_color);
        }

        if maximizing {
            let mut best = i32::MIN;
            for m in &moves {
                let mut after = board.scoped_move(m.from(), m.to());
                let score = self.minimax(&mut after, depth - 1, false, alpha, beta, ai_color);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for m in &moves {
                let mut after = board.scoped_move(m.from(), m.to());
                let score = self.minimax(&mut after, depth - 1, true, alpha, beta, ai_color);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Picks the best move for `ai_color` among its pseudo-legal moves.
    ///
    /// Root candidates are not filtered for self-check; every reply below
    /// the root is. Each candidate is scored with a full-window search of
    /// `depth` further plies, and the strict maximum wins. Returns `None`
    /// when `ai_color` has no candidate at all.
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        ai_color: Color,
        depth: u32,
    ) -> Option<SearchResult> {
        let candidates = pseudo_legal_moves(board, ai_color);
        self.search_root(board, &candidates, ai_color, depth)
    }

    /// Like [`choose_move`](Self::choose_move), but only considers moves
    /// that keep `ai_color`'s king safe.
    pub fn choose_legal_move(
        &mut self,
        board: &mut Board,
        ai_color: Color,
        depth: u32,
    ) -> Option<SearchResult> {
        let candidates = generate_legal_moves(board, ai_color);
        self.search_root(board, &candidates, ai_color, depth)
    }

    fn search_root(
        &mut self,
        board: &mut Board,
        candidates: &MoveList,
        ai_color: Color,
        depth: u32,
    ) -> Option<SearchResult> {
        let start = Instant::now();
        let start_nodes = self.nodes;
        let mut best: Option<(Move, i32)> = None;

        for m in candidates {
            let mut after = board.scoped_move(m.from(), m.to());
            let score = self.minimax(&mut after, depth, false, i32::MIN, i32::MAX, ai_color);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*m, score));
            }
        }

        let (best_move, score) = best?;
        let nodes = self.nodes - start_nodes;
        debug!(
            color = %ai_color,
            depth,
            candidates = candidates.len(),
            nodes,
            best = %best_move,
            score,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        Some(SearchResult {
            best_move,
            score,
            nodes,
        })
    }
}

/// Runs [`Searcher::choose_move`] with a fresh searcher.
pub fn choose_move(board: &mut Board, ai_color: Color, depth: u32) -> Option<SearchResult> {
    Searcher::new().choose_move(board, ai_color, depth)
}

/// Runs [`Searcher::choose_legal_move`] with a fresh searcher.
pub fn choose_legal_move(board: &mut Board, ai_color: Color, depth: u32) -> Option<SearchResult> {
    Searcher::new().choose_legal_move(board, ai_color, depth)
}

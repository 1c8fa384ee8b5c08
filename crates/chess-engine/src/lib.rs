//! Chess rules engine with a mailbox board and minimax search.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox with query and mutation primitives
//! - Move generation, attack detection and perft in [`movegen`]
//! - Reversible make/unmake on the shared board ([`MoveGuard`])
//! - Checkmate and stalemate detection in [`rules`]
//! - Material evaluation and alpha-beta search in [`search`]
//! - [`Game`] - turn, selection and promotion handling for a front-end
//!
//! # Architecture
//!
//! There is exactly one board per game. Search and legality checks try
//! moves on it in place and take them back, so no board copies are made.
//! Castling, en passant and draw rules other than stalemate are not
//! implemented.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus, MoveOutcome};
//! use chess_core::{Color, Move};
//!
//! let mut game = Game::new().with_ai(Some(Color::Black));
//! let outcome = game.play(Move::from_uci("e2e4").unwrap()).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Moved { .. }));
//!
//! let (reply, _) = game.play_ai_move(2).unwrap();
//! println!("Black answers {}", reply);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

mod board;
mod error;
mod executor;
mod game;
pub mod movegen;
pub mod promotion;
pub mod rules;
pub mod search;

pub use board::Board;
pub use error::{square_at, EngineError};
pub use executor::MoveGuard;
pub use game::{Game, MoveOutcome};
pub use movegen::{
    generate_legal_moves, is_in_check, is_square_attacked, legal_destinations,
    pseudo_legal_moves, MoveList,
};
pub use promotion::{FixedPromotion, PromotionPolicy, RandomPromotion};
pub use rules::{game_status, GameStatus};
pub use search::{choose_move, evaluate, SearchResult, Searcher, DEFAULT_DEPTH};

//! Integration tests for playing games through the public API.
//!
//! Run with: `cargo test -p chess-engine --test game_flow`

use chess_core::{Color, Move, Piece, Square};
use chess_engine::{
    generate_legal_moves, is_in_check, Board, EngineError, FixedPromotion, Game, GameStatus,
    MoveOutcome, RandomPromotion,
};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = Move::from_uci(text).unwrap();
        game.play(mv)
            .unwrap_or_else(|e| panic!("{} rejected: {}", text, e));
    }
}

#[test]
fn test_knight_destinations_from_start() {
    let mut game = Game::new();
    let targets = game.select_coords(1, 7).unwrap().to_vec();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&Square::from_coords(0, 5).unwrap()));
    assert!(targets.contains(&Square::from_coords(2, 5).unwrap()));
}

#[test]
fn test_pawn_double_step_gating() {
    // Both squares free: the double step succeeds.
    let mut game = Game::new();
    assert!(game.move_piece(sq("e2"), sq("e4")).is_ok());

    // First square occupied.
    let mut game = Game::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    assert!(matches!(
        game.move_piece(sq("e2"), sq("e4")),
        Err(EngineError::IllegalMove(_))
    ));

    // Second square occupied: only the single step is allowed.
    let mut game = Game::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    assert!(game.move_piece(sq("e2"), sq("e4")).is_err());
    assert!(game.move_piece(sq("e2"), sq("e3")).is_ok());
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"],
    );
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(is_in_check(game.board(), Color::Black));
    assert_eq!(game.last_moved_square(), Some(sq("f7")));
}

#[test]
fn test_stalemate_after_move() {
    // Queen to f7 leaves the black king on h8 without moves.
    let mut game = Game::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").unwrap();
    play_all(&mut game, &["f1f7"]);
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(!is_in_check(game.board(), Color::Black));
}

#[test]
fn test_pending_promotion_protocol() {
    let mut game = Game::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();

    // Capturing onto the last row also promotes.
    let outcome = game.move_piece(sq("a7"), sq("b8")).unwrap();
    let MoveOutcome::PromotionPending { square, captured } = outcome else {
        panic!("expected a pending promotion, got {:?}", outcome);
    };
    assert_eq!(square, sq("b8"));
    assert_eq!(captured.map(|p| p.piece), Some(Piece::Knight));

    assert_eq!(game.play_ai_move(1), Err(EngineError::PromotionPending));
    game.complete_promotion(Piece::Queen).unwrap();
    assert_eq!(game.piece_at(sq("b8")).unwrap().piece, Piece::Queen);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_ai_against_ai_keeps_board_consistent() {
    let mut game = Game::new()
        .with_ai(Some(Color::White))
        .with_promotion_policy(RandomPromotion::seeded(1));
    for _ in 0..8 {
        if game.is_over() {
            break;
        }
        let mover = game.side_to_move();
        let (mv, _) = game.play_ai_move(1).unwrap();
        assert_eq!(game.last_moved_square(), Some(mv.to()));
        assert!(!is_in_check(game.board(), mover));
        for color in Color::ALL {
            assert!(game.board().find_king(color).is_some());
        }
    }
}

#[test]
fn test_ai_promotes_with_policy() {
    let mut game = Game::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1")
        .unwrap()
        .with_ai(Some(Color::White))
        .with_promotion_policy(FixedPromotion(Piece::Queen));
    let (mv, outcome) = game.play_ai_move(1).unwrap();
    assert_eq!(mv, Move::new(sq("a7"), sq("a8"), Some(Piece::Queen)));
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            captured: None,
            promoted: Some(Piece::Queen),
        }
    );
}

#[test]
fn test_no_legal_moves_for_ai() {
    let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(
        game.play_ai_move(2),
        Err(EngineError::GameOver(GameStatus::Stalemate))
    );
}

#[test]
fn test_legal_move_count_matches_game() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "d7d5"]);
    let mut board: Board = game.board().clone();
    let expected = generate_legal_moves(&mut board, Color::White).len();
    assert_eq!(game.legal_moves().len(), expected);
    // e4xd5 is among them.
    assert!(game.legal_moves().contains_squares(sq("e4"), sq("d5")));
}

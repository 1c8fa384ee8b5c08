//! Game management for a front-end.
//!
//! The [`Game`] struct wraps the board with everything a UI needs:
//! - Turn tracking and game status
//! - Square selection with cached destinations for highlighting
//! - The last-moved square
//! - A pending promotion slot for the interactive side
//! - An optional AI side driven by the search

use chess_core::{Color, ColoredPiece, FenParser, Move, Piece, Square};
use tracing::{debug, info, warn};

use crate::error::square_at;
use crate::movegen::{generate_legal_moves, legal_destinations, MoveList};
use crate::promotion::{PromotionPolicy, RandomPromotion};
use crate::rules::{game_status, GameStatus};
use crate::search::{self, SearchResult};
use crate::{Board, EngineError};

/// Result of a successful move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is complete and the turn has passed.
    Moved {
        /// The piece removed from the destination, if any.
        captured: Option<ColoredPiece>,
        /// The piece a pawn was promoted to, if the move promoted.
        promoted: Option<Piece>,
    },
    /// A pawn reached the last row and waits for
    /// [`Game::complete_promotion`]. The turn has not passed yet.
    PromotionPending {
        /// Where the pawn stands.
        square: Square,
        /// The piece removed from the destination, if any.
        captured: Option<ColoredPiece>,
    },
}

/// A chess game between a human side and an optional AI side.
#[derive(Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    /// Side played by the search, if any.
    ai_color: Option<Color>,
    selected: Option<Square>,
    /// Destinations of the selected piece.
    highlighted: Vec<Square>,
    last_moved: Option<Square>,
    pending_promotion: Option<Square>,
    /// Status of `side_to_move`, refreshed after every completed move.
    status: GameStatus,
    /// Resolves promotions that are not asked interactively.
    promotion: Box<dyn PromotionPolicy>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position with White to
    /// move and no AI side.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            ai_color: None,
            selected: None,
            highlighted: Vec::new(),
            last_moved: None,
            pending_promotion: None,
            status: GameStatus::Playing,
            promotion: Box::new(RandomPromotion::new()),
        }
    }

    /// Creates a game from a FEN string.
    ///
    /// Only the placement and the side to move are read. Both kings must be
    /// present.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = Board::from_parsed(&parsed);
        board.king_square(parsed.active_color.opposite())?;
        let status = game_status(&mut board, parsed.active_color)?;
        Ok(Game {
            board,
            side_to_move: parsed.active_color,
            status,
            ..Self::new()
        })
    }

    /// Sets the side played by the search.
    pub fn with_ai(mut self, ai_color: Option<Color>) -> Self {
        self.ai_color = ai_color;
        self
    }

    /// Replaces the policy used for automatic promotions.
    pub fn with_promotion_policy(mut self, policy: impl PromotionPolicy + 'static) -> Self {
        self.promotion = Box::new(policy);
        self
    }

    /// Puts the pieces back in their starting layout with White to move.
    ///
    /// The AI side and the promotion policy are kept.
    pub fn reset(&mut self) {
        self.board.setup_initial_position();
        self.side_to_move = Color::White;
        self.selected = None;
        self.highlighted.clear();
        self.last_moved = None;
        self.pending_promotion = None;
        self.status = GameStatus::Playing;
        info!("game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.board.piece_at(sq)
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the side played by the search, if any.
    pub fn ai_color(&self) -> Option<Color> {
        self.ai_color
    }

    /// Returns true if the search should pick the next move.
    pub fn is_ai_turn(&self) -> bool {
        self.ai_color == Some(self.side_to_move) && !self.status.is_over()
    }

    /// Returns the status for the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once checkmate or stalemate has been reached.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Computes the status as if `color` were to move.
    pub fn status_for(&mut self, color: Color) -> Result<GameStatus, EngineError> {
        game_status(&mut self.board, color)
    }

    /// Returns the destination of the most recent move.
    pub fn last_moved_square(&self) -> Option<Square> {
        self.last_moved
    }

    /// Returns the square of a pawn waiting for its promotion piece.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Returns the pseudo-legal destinations of the piece on `sq`.
    ///
    /// Empty squares have no destinations. Moves that would leave the king
    /// in check are included; [`move_piece`](Self::move_piece) rejects them.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        match self.board.piece_at(sq) {
            Some(piece) => legal_destinations(&self.board, piece, sq),
            None => Vec::new(),
        }
    }

    /// Returns every move of the side to move that keeps its king safe.
    pub fn legal_moves(&mut self) -> MoveList {
        generate_legal_moves(&mut self.board, self.side_to_move)
    }

    /// Selects the piece on `sq` and caches its destinations.
    ///
    /// Only pieces of the side to move can be selected; anything else clears
    /// the selection. Returns the highlighted destinations.
    pub fn select_square(&mut self, sq: Square) -> &[Square] {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.side_to_move => {
                self.selected = Some(sq);
                self.highlighted = legal_destinations(&self.board, piece, sq);
            }
            _ => self.deselect(),
        }
        &self.highlighted
    }

    /// Coordinate form of [`select_square`](Self::select_square).
    pub fn select_coords(&mut self, x: i8, y: i8) -> Result<&[Square], EngineError> {
        let sq = square_at(x, y)?;
        Ok(self.select_square(sq))
    }

    /// Clears the selection and its highlighted destinations.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    /// Returns the selected square, if any.
    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the destinations highlighted for the selected piece.
    pub fn highlighted(&self) -> &[Square] {
        &self.highlighted
    }

    /// Returns true if `sq` is a destination of the selected piece.
    pub fn is_legal_destination(&self, sq: Square) -> bool {
        self.highlighted.contains(&sq)
    }

    /// Moves the piece on `from` to `to` for the side to move.
    ///
    /// A pawn reaching the last row is promoted through the promotion
    /// policy when it belongs to the AI side. Otherwise the move reports
    /// [`MoveOutcome::PromotionPending`] and the turn passes only after
    /// [`complete_promotion`](Self::complete_promotion).
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, EngineError> {
        let auto = self.ai_color == Some(self.side_to_move);
        self.execute(from, to, None, auto)
    }

    /// Coordinate form of [`move_piece`](Self::move_piece).
    pub fn move_coords(
        &mut self,
        x1: i8,
        y1: i8,
        x2: i8,
        y2: i8,
    ) -> Result<MoveOutcome, EngineError> {
        let from = square_at(x1, y1)?;
        let to = square_at(x2, y2)?;
        self.move_piece(from, to)
    }

    /// Plays a move, using its promotion piece when it carries one.
    ///
    /// A promotion piece on a move that does not promote is rejected.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        let auto = self.ai_color == Some(self.side_to_move);
        self.execute(mv.from(), mv.to(), mv.promotion(), auto)
    }

    /// Supplies the piece for a pending promotion and passes the turn.
    pub fn complete_promotion(&mut self, piece: Piece) -> Result<(), EngineError> {
        let sq = self.pending_promotion.ok_or(EngineError::NoPendingPromotion)?;
        self.board.promote(sq, piece)?;
        self.pending_promotion = None;
        debug!(square = %sq, %piece, "promotion completed");
        self.finish_turn()
    }

    /// Runs the search for the side to move without playing the result.
    ///
    /// Root candidates come from pseudo-legal generation; if the winner
    /// would leave the king in check, the search is repeated over safe
    /// moves only. Returns `None` when there is nothing to play.
    pub fn choose_ai_move(&mut self, depth: u32) -> Result<Option<SearchResult>, EngineError> {
        self.ensure_can_move()?;
        let color = self.side_to_move;
        let Some(result) = search::choose_move(&mut self.board, color, depth) else {
            return Ok(None);
        };
        let best = result.best_move;
        if self.board.simulate_move(best.from(), best.to(), color) {
            return Ok(Some(result));
        }
        debug!(mv = %best, "search picked a self-check move, retrying");
        Ok(search::choose_legal_move(&mut self.board, color, depth))
    }

    /// Searches and plays a move for the side to move.
    ///
    /// Promotions are resolved through the promotion policy. Returns the
    /// move played, including its promotion piece.
    pub fn play_ai_move(&mut self, depth: u32) -> Result<(Move, MoveOutcome), EngineError> {
        let color = self.side_to_move;
        let result = self
            .choose_ai_move(depth)?
            .ok_or(EngineError::NoLegalMoves(color))?;
        let from = result.best_move.from();
        let to = result.best_move.to();
        let outcome = self.execute(from, to, None, true)?;
        let promoted = match outcome {
            MoveOutcome::Moved { promoted, .. } => promoted,
            MoveOutcome::PromotionPending { .. } => None,
        };
        let mv = Move::new(from, to, promoted);
        info!(%color, %mv, score = result.score, nodes = result.nodes, "ai move");
        Ok((mv, outcome))
    }

    fn ensure_can_move(&self) -> Result<(), EngineError> {
        if self.pending_promotion.is_some() {
            return Err(EngineError::PromotionPending);
        }
        if self.status.is_over() {
            return Err(EngineError::GameOver(self.status));
        }
        Ok(())
    }

    fn execute(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
        auto_promote: bool,
    ) -> Result<MoveOutcome, EngineError> {
        self.ensure_can_move()?;
        let mv = Move::new(from, to, promotion);

        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => piece,
            _ => return Err(EngineError::IllegalMove(mv)),
        };
        if !legal_destinations(&self.board, piece, from).contains(&to) {
            debug!(%mv, "destination not reachable");
            return Err(EngineError::IllegalMove(mv));
        }
        let promotes = piece.piece == Piece::Pawn && to.y() == piece.color.promotion_row() as i8;
        if let Some(choice) = promotion {
            if !choice.is_promotion_target() {
                return Err(EngineError::InvalidPromotion(choice));
            }
            if !promotes {
                return Err(EngineError::IllegalMove(mv));
            }
        }
        // The board is untouched until the promotion piece is known to be valid.
        let choice = match promotion {
            Some(choice) => Some(choice),
            None if promotes && auto_promote => {
                let choice = self.promotion.choose_promotion(piece.color);
                if !choice.is_promotion_target() {
                    warn!(?choice, "promotion policy returned an invalid piece");
                    return Err(EngineError::InvalidPromotion(choice));
                }
                Some(choice)
            }
            None => None,
        };

        let captured = self.board.commit_move(from, to)?;
        self.last_moved = Some(to);
        self.deselect();
        debug!(%mv, ?captured, "move played");

        if promotes {
            let Some(choice) = choice else {
                self.pending_promotion = Some(to);
                debug!(square = %to, "promotion pending");
                return Ok(MoveOutcome::PromotionPending {
                    square: to,
                    captured,
                });
            };
            self.board.promote(to, choice)?;
            debug!(square = %to, piece = %choice, "pawn promoted");
            self.finish_turn()?;
            return Ok(MoveOutcome::Moved {
                captured,
                promoted: Some(choice),
            });
        }

        self.finish_turn()?;
        Ok(MoveOutcome::Moved {
            captured,
            promoted: None,
        })
    }

    fn finish_turn(&mut self) -> Result<(), EngineError> {
        self.side_to_move = self.side_to_move.opposite();
        self.status = game_status(&mut self.board, self.side_to_move)?;
        if self.status.is_over() {
            info!(status = %self.status, side = %self.side_to_move, "game over");
        }
        Ok(())
    }
}

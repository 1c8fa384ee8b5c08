//! Promotion choice for sides that are not asked interactively.

use std::fmt;

use chess_core::{Color, Piece};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the piece a pawn promotes to when nobody is asked.
///
/// Implementations must return one of [`Piece::PROMOTIONS`].
pub trait PromotionPolicy: fmt::Debug {
    /// Chooses the promotion piece for a pawn of `color`.
    fn choose_promotion(&mut self, color: Color) -> Piece;
}

/// Uniformly random choice among queen, rook, bishop, and knight.
#[derive(Debug)]
pub struct RandomPromotion {
    rng: StdRng,
}

impl RandomPromotion {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        RandomPromotion {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible policy.
    pub fn seeded(seed: u64) -> Self {
        RandomPromotion {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPromotion {
    fn default() -> Self {
        Self::new()
    }
}

impl PromotionPolicy for RandomPromotion {
    fn choose_promotion(&mut self, _color: Color) -> Piece {
        Piece::PROMOTIONS[self.rng.gen_range(0..Piece::PROMOTIONS.len())]
    }
}

/// Always promotes to the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub Piece);

impl Default for FixedPromotion {
    fn default() -> Self {
        FixedPromotion(Piece::Queen)
    }
}

impl PromotionPolicy for FixedPromotion {
    fn choose_promotion(&mut self, _color: Color) -> Piece {
        self.0
    }
}

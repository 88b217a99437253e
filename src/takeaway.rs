//! The single-pile take-away game: players alternately remove between one
//! and [`MAX_TAKE`] tokens from a pile, and whoever takes the last token
//! wins.
//!
//! While not much of a game, it is great for exercising the search
//! end-to-end: the state is two words, perfect play is known in closed form
//! (piles of `4k` tokens are lost for the side to move), and the engine's
//! decided-position detection is exact here — a pile of one token admits
//! exactly one move (the mover takes it and wins) and an empty pile admits
//! none (the mover has already lost).

use std::fmt;

use crate::environment::{Environment, Player, Promotions, Rollout};

/// Largest number of tokens a single move may remove.
pub const MAX_TAKE: u32 = 3;

/// A move: remove this many tokens from the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take(pub u32);

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full game state: the pile and the player to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeAway {
    tokens: u32,
    side: Player,
}

impl TakeAway {
    /// Starts a game with `tokens` on the pile, White to move.
    #[must_use]
    pub const fn new(tokens: u32) -> Self {
        Self {
            tokens,
            side: Player::White,
        }
    }

    /// Number of tokens left on the pile.
    #[must_use]
    pub const fn tokens(&self) -> u32 {
        self.tokens
    }
}

fn takes(tokens: u32) -> Vec<Take> {
    (1..=MAX_TAKE.min(tokens)).map(Take).collect()
}

impl Environment for TakeAway {
    type Move = Take;
    type Rollout = Pile;

    fn side_to_move(&self) -> Player {
        self.side
    }

    fn generate_moves(&self, _promotions: Promotions, _at_root: bool) -> Vec<Take> {
        takes(self.tokens)
    }

    fn make_move(&mut self, m: &Take) {
        debug_assert!(m.0 >= 1 && m.0 <= MAX_TAKE.min(self.tokens));
        self.tokens -= m.0;
        self.side = !self.side;
    }

    fn rollout(&self) -> Pile {
        Pile {
            tokens: self.tokens,
            side: self.side,
        }
    }
}

/// Lightweight snapshot of a take-away position.
///
/// For this game the snapshot carries the same data as the full state; it
/// exists to keep the playout fast path on the same seam a heavier game
/// would use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    tokens: u32,
    side: Player,
}

impl Pile {
    /// Number of tokens left on the pile.
    #[must_use]
    pub const fn tokens(&self) -> u32 {
        self.tokens
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side
    }
}

impl Rollout for Pile {
    type Move = Take;

    // Both players draw from the same pile, so `side` does not affect the
    // available moves.
    fn generate_moves(&self, _side: Player) -> Vec<Take> {
        takes(self.tokens)
    }

    fn make_move(&mut self, m: &Take) {
        debug_assert!(m.0 >= 1 && m.0 <= MAX_TAKE.min(self.tokens));
        self.tokens -= m.0;
        self.side = !self.side;
    }
}

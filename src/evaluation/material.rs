//! Provides a very basic evaluation of take-away positions based on token
//! parity.
//!
//! With best play the side facing a pile of `4k` tokens loses: whatever it
//! removes, the opponent can restore the multiple of four. This evaluation
//! function is not interesting on its own, but it is stable, easy to
//! understand and deterministic, which makes it great for testing search and
//! other infrastructure.

use crate::environment::Player;
use crate::evaluation::{Evaluate, Reward};
use crate::takeaway::{Pile, MAX_TAKE};

/// Confidence assigned to the theoretically winning side. Kept away from the
/// extremes so playout outcomes still dominate clean wins and losses.
const WINNING: Reward = 0.9;

/// Scores a take-away position by the parity of the remaining tokens.
pub struct Material;

impl Evaluate<Pile> for Material {
    fn evaluate(&self, rollout: &Pile, side: Player) -> Reward {
        let mover = if rollout.tokens() % (MAX_TAKE + 1) == 0 {
            1.0 - WINNING
        } else {
            WINNING
        };
        if rollout.side_to_move() == side {
            mover
        } else {
            1.0 - mover
        }
    }
}

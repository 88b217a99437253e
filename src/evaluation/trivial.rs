//! The simplest possible evaluation: every position is a coin flip.
//!
//! Useless for playing strength, but a valuable control when testing the
//! search itself, since it removes the evaluator from the equation entirely.

use crate::environment::Player;
use crate::evaluation::{Evaluate, Reward};

/// Scores every position as perfectly balanced.
pub struct Trivial;

impl<R> Evaluate<R> for Trivial {
    fn evaluate(&self, _rollout: &R, _side: Player) -> Reward {
        0.5
    }
}

//! This module implements "static" [evaluation], i.e. predicting the expected
//! outcome of a position without running [`crate::search`].
//!
//! The search only consults an evaluator when a playout burns through its
//! depth budget without reaching a decided position; everything else is
//! driven by playout statistics.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

use crate::environment::Player;

pub mod material;

mod trivial;
pub use trivial::Trivial;

/// Scalar playout outcome in `[0, 1]`: 1 is a win for the side the value is
/// relative to, 0 a loss, anything in between an estimate.
pub type Reward = f32;

/// Heuristic score of a non-terminal lightweight position.
pub trait Evaluate<R> {
    /// Scores `rollout` from `side`'s perspective. The result must stay
    /// within `[0, 1]`.
    fn evaluate(&self, rollout: &R, side: Player) -> Reward;
}

//! Randomized playouts: estimate the value of a position by playing it out
//! with uniformly random moves on a lightweight snapshot.
//!
//! Decided positions are detected by move count alone: a side with exactly
//! one available reply is treated as having won, a side with none as having
//! lost. That is an approximation, not a real terminal test (checkmate,
//! stalemate and draws are never consulted), and it changes search outcomes
//! compared to one. It is kept because the playout path has no access to
//! game-specific terminal rules, only to the move generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::environment::{Environment, Rollout};
use crate::evaluation::{Evaluate, Reward};

const fn decided(for_node_side: bool) -> Reward {
    if for_node_side {
        1.0
    } else {
        0.0
    }
}

/// Plays out up to `depth_limit` random plies from `position` and returns
/// the outcome for the side to move at `position`.
///
/// A playout that is still undecided after `depth_limit` plies falls back to
/// the evaluator; its estimate is reported as-is, so an unfinished playout
/// stays distinguishable from a clean loss.
pub(super) fn simulate<E, V, R>(
    position: &E,
    depth_limit: usize,
    evaluator: &V,
    rng: &mut R,
) -> Reward
where
    E: Environment,
    V: Evaluate<E::Rollout>,
    R: Rng,
{
    let node_side = position.side_to_move();
    let mut rollout = position.rollout();
    let mut side = node_side;
    for _ in 0..depth_limit {
        let moves = rollout.generate_moves(side);
        if moves.len() == 1 {
            return decided(side == node_side);
        }
        match moves.choose(rng) {
            Some(action) => rollout.make_move(action),
            // No reply at all: the side to move has lost.
            None => return decided(side != node_side),
        }
        side = !side;
    }
    evaluator.evaluate(&rollout, node_side)
}

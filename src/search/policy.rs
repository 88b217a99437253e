//! Selection policy: [Upper Confidence bounds applied to Trees] (UCT).
//!
//! The policy balances exploitation (mean playout reward) against
//! exploration (how rarely a child has been tried relative to its parent).
//! An unvisited child scores infinitely high, which guarantees every child
//! is played out once before any sibling is revisited.
//!
//! [Upper Confidence bounds applied to Trees]: https://www.chessprogramming.org/UCT

use crate::environment::Environment;
use crate::evaluation::Reward;

use super::tree::{Node, NodeIndex, Tree, ROOT};

/// UCT score of a child given its parent's visit count.
///
/// The unvisited case is an explicit branch rather than a division: relying
/// on `0 / 0` to produce something useful would yield NaN and poison every
/// comparison downstream.
pub(super) fn uct<E: Environment>(child: &Node<E>, parent_visits: u32, exploration: f32) -> Reward {
    if !child.visited() {
        return f32::INFINITY;
    }
    let spread = ((parent_visits as f32).ln() / child.visits as f32).sqrt();
    exploration.mul_add(spread, child.average_reward())
}

/// Child of `parent` with the highest UCT score, `None` if there are no
/// children.
///
/// The first unvisited child wins outright (all unvisited children score
/// infinity, so expansion order is the de facto tie-break); among visited
/// children a strictly-greater comparison keeps the earliest on ties.
pub(super) fn best_child<E: Environment>(
    tree: &Tree<E>,
    parent: NodeIndex,
    exploration: f32,
) -> Option<NodeIndex> {
    let node = tree.node(parent);
    let mut best = None;
    let mut best_score = f32::NEG_INFINITY;
    for &child in &node.children {
        let candidate = tree.node(child);
        if !candidate.visited() {
            return Some(child);
        }
        let score = uct(candidate, node.visits, exploration);
        if score > best_score {
            best = Some(child);
            best_score = score;
        }
    }
    best
}

/// Walks down from the root while the current node is fully explored
/// interior territory: expanded, with children, all of them visited.
///
/// Stops at unexpanded nodes, at nodes that still have an unvisited child
/// (leaves), and at childless expanded nodes (nothing to descend into).
pub(super) fn descend<E: Environment>(tree: &Tree<E>, exploration: f32) -> NodeIndex {
    let mut current = ROOT;
    loop {
        let node = tree.node(current);
        if !node.expanded || node.children.is_empty() || !tree.fully_visited(current) {
            return current;
        }
        match best_child(tree, current, exploration) {
            Some(next) => current = next,
            None => return current,
        }
    }
}

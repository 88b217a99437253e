//! Search tree storage and statistics.
//!
//! Nodes live in an arena (`Vec`) and refer to each other by index: children
//! are owned by the arena, and a child keeps a non-owning index back to its
//! parent for backpropagation. The root is always slot 0.

use crate::environment::{Environment, Promotions};
use crate::evaluation::Reward;

pub(super) type NodeIndex = usize;

/// Index of the root node in any tree.
pub(super) const ROOT: NodeIndex = 0;

/// A single search node.
///
/// `action`, `position` and `parent` are fixed at creation; only `visits`,
/// `reward` and the one-shot `expanded` flag change afterwards, and only
/// through [`Tree::backpropagate`] and [`Tree::expand`].
pub(super) struct Node<E: Environment> {
    pub(super) parent: Option<NodeIndex>,
    /// Children in move-generation order. The order is load-bearing: it is
    /// the tie-break order between equally scored siblings.
    pub(super) children: Vec<NodeIndex>,
    /// Move that produced this position; `None` only for the root.
    pub(super) action: Option<E::Move>,
    pub(super) position: E,
    /// Number of completed playouts that passed through this node.
    pub(super) visits: u32,
    /// Accumulated reward mass from those playouts, not an average.
    pub(super) reward: Reward,
    pub(super) expanded: bool,
}

impl<E: Environment> Node<E> {
    fn root(position: E) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            action: None,
            position,
            visits: 0,
            reward: 0.0,
            expanded: false,
        }
    }

    fn child(parent: NodeIndex, action: E::Move, position: E) -> Self {
        Self {
            parent: Some(parent),
            children: Vec::new(),
            action: Some(action),
            position,
            visits: 0,
            reward: 0.0,
            expanded: false,
        }
    }

    #[must_use]
    pub(super) const fn visited(&self) -> bool {
        self.visits > 0
    }

    /// Mean playout reward.
    ///
    /// # Panics
    ///
    /// Panics on an unvisited node: the average is undefined there, and
    /// asking for it is a bug in the caller.
    #[must_use]
    pub(super) fn average_reward(&self) -> Reward {
        assert!(
            self.visited(),
            "average reward is undefined for an unvisited node"
        );
        self.reward / self.visits as f32
    }
}

pub(super) struct Tree<E: Environment> {
    nodes: Vec<Node<E>>,
}

impl<E: Environment> Tree<E> {
    pub(super) fn new(root: E) -> Self {
        Self {
            nodes: vec![Node::root(root)],
        }
    }

    pub(super) fn node(&self, index: NodeIndex) -> &Node<E> {
        &self.nodes[index]
    }

    /// Total number of materialized nodes.
    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True once every child of `index` has been visited at least once.
    pub(super) fn fully_visited(&self, index: NodeIndex) -> bool {
        self.nodes[index]
            .children
            .iter()
            .all(|&child| self.nodes[child].visited())
    }

    /// Materializes the children of `index` from its legal moves, one child
    /// per move, in generation order. A second call is a no-op; a position
    /// with no legal moves stays a childless expanded node forever.
    pub(super) fn expand(&mut self, index: NodeIndex, promotions: Promotions, at_root: bool) {
        if self.nodes[index].expanded {
            return;
        }
        let position = self.nodes[index].position.clone();
        for action in position.generate_moves(promotions, at_root) {
            let mut next = position.clone();
            next.make_move(&action);
            let child = self.nodes.len();
            self.nodes.push(Node::child(index, action, next));
            self.nodes[index].children.push(child);
        }
        self.nodes[index].expanded = true;
    }

    /// Records a playout result on `index` and every ancestor up to and
    /// including the root.
    ///
    /// The reward is complemented at each step up: what is good for the side
    /// to move at the simulated node is exactly that bad for the opponent
    /// one ply above.
    pub(super) fn backpropagate(&mut self, index: NodeIndex, reward: Reward) {
        let mut current = Some(index);
        let mut value = reward;
        while let Some(at) = current {
            let node = &mut self.nodes[at];
            node.visits += 1;
            node.reward += value;
            value = 1.0 - value;
            current = node.parent;
        }
    }
}

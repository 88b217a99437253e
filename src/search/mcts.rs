//! The iteration state machine of the search.
//!
//! Each iteration performs the four MCTS phases in order:
//!
//! 1. Selection: walk from the root through fully explored nodes, guided by
//!    the UCT policy.
//! 2. Expansion: materialize the children of the reached leaf (a no-op when
//!    it already has them).
//! 3. Simulation: run a random playout from the most promising fresh child,
//!    or from the leaf itself when the position has no continuations.
//! 4. Backpropagation: record the playout result on the path back to the
//!    root, complementing the reward at every ply.
//!
//! After every iteration the current best root move is recomputed, so the
//! loop can stop at any boundary and still publish a move.

use std::io::Write;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::environment::Environment;
use crate::evaluation::Evaluate;

use super::settings::Settings;
use super::tree::{Tree, ROOT};
use super::{policy, simulation, Control, Limiter, SearchReport, StopReason};

pub(super) struct Search<E: Environment> {
    tree: Tree<E>,
    rng: StdRng,
    iterations: u64,
    best_move: Option<E::Move>,
}

impl<E: Environment> Search<E> {
    pub(super) fn new(root: E, settings: &Settings) -> Self {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            tree: Tree::new(root),
            rng,
            iterations: 0,
            best_move: None,
        }
    }

    pub(super) fn run<V, W>(
        &mut self,
        evaluator: &V,
        settings: &Settings,
        control: &Control,
        output: &mut W,
    ) -> SearchReport<E::Move>
    where
        V: Evaluate<E::Rollout>,
        W: Write,
    {
        let limiter = Limiter {
            timer: Instant::now(),
            iterations: settings.max_iterations,
            time: settings.move_time,
        };

        // The root is always expanded before the first selection step.
        self.tree.expand(ROOT, settings.promotions, true);
        if self.tree.node(ROOT).children.is_empty() {
            writeln!(output, "info string no legal moves").unwrap();
            return self.report(StopReason::NoLegalMoves);
        }

        let stop = loop {
            if control.abort_requested() {
                break StopReason::Aborted;
            }
            if let Some(stop) = limiter.stop_reason(self.iterations) {
                break stop;
            }
            self.iterate(evaluator, settings);
            self.iterations += 1;
            self.best_move = self.best_root_move();
        };

        writeln!(
            output,
            "info iterations {} nodes {} time {}",
            self.iterations,
            self.tree.len(),
            limiter.timer.elapsed().as_millis(),
        )
        .unwrap();

        self.report(stop)
    }

    /// One full select-expand-simulate-backpropagate pass.
    fn iterate<V: Evaluate<E::Rollout>>(&mut self, evaluator: &V, settings: &Settings) {
        let leaf = policy::descend(&self.tree, settings.exploration);
        self.tree.expand(leaf, settings.promotions, leaf == ROOT);
        let target = policy::best_child(&self.tree, leaf, settings.exploration).unwrap_or(leaf);
        let reward = simulation::simulate(
            &self.tree.node(target).position,
            settings.playout_depth,
            evaluator,
            &mut self.rng,
        );
        self.tree.backpropagate(target, reward);
    }

    /// Root child with the highest average reward; earlier children win
    /// ties. Children that were never visited have no defined average and
    /// are skipped.
    fn best_root_move(&self) -> Option<E::Move> {
        let root = self.tree.node(ROOT);
        let mut best = None;
        let mut best_average = f32::NEG_INFINITY;
        for &child in &root.children {
            let node = self.tree.node(child);
            if !node.visited() {
                continue;
            }
            let average = node.average_reward();
            if average > best_average {
                best_average = average;
                best = node.action.clone();
            }
        }
        best
    }

    fn report(&self, stop: StopReason) -> SearchReport<E::Move> {
        SearchReport {
            best_move: self.best_move.clone(),
            stop,
            iterations: self.iterations,
            nodes: self.tree.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::evaluation::Trivial;
    use crate::takeaway::{Take, TakeAway};

    fn settings(iterations: u64) -> Settings {
        Settings {
            max_iterations: Some(iterations),
            seed: Some(1),
            ..Settings::default()
        }
    }

    #[test]
    fn every_iteration_passes_through_the_root() {
        let settings = settings(17);
        let mut search = Search::new(TakeAway::new(12), &settings);
        let report = search.run(&Trivial, &settings, &Control::new(), &mut io::sink());

        assert_eq!(report.iterations, 17);
        assert_eq!(search.tree.node(ROOT).visits, 17);
        assert_eq!(report.stop, StopReason::IterationLimit);
    }

    #[test]
    fn a_single_legal_move_is_always_chosen() {
        let settings = settings(9);
        let mut search = Search::new(TakeAway::new(1), &settings);
        let report = search.run(&Trivial, &settings, &Control::new(), &mut io::sink());

        assert_eq!(report.best_move, Some(Take(1)));
    }

    #[test]
    fn an_empty_root_yields_no_move() {
        let settings = settings(64);
        let mut search = Search::new(TakeAway::new(0), &settings);
        let report = search.run(&Trivial, &settings, &Control::new(), &mut io::sink());

        assert_eq!(report.best_move, None);
        assert_eq!(report.stop, StopReason::NoLegalMoves);
        assert_eq!(report.iterations, 0);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn an_abort_before_the_first_iteration_decides_nothing() {
        let settings = settings(64);
        let control = Control::new();
        control.request_abort();

        let mut search = Search::new(TakeAway::new(12), &settings);
        let report = search.run(&Trivial, &settings, &control, &mut io::sink());

        assert_eq!(report.best_move, None);
        assert_eq!(report.stop, StopReason::Aborted);
        assert_eq!(report.iterations, 0);
    }

    #[test]
    fn a_childless_expanded_node_is_simulated_in_place() {
        // From a pile of two, taking two leads to an empty pile: a node that
        // expands to nothing and keeps collecting visits of its own.
        let settings = settings(32);
        let mut search = Search::new(TakeAway::new(2), &settings);
        let report = search.run(&Trivial, &settings, &Control::new(), &mut io::sink());

        assert_eq!(report.iterations, 32);
        assert!(report.best_move.is_some());
    }
}

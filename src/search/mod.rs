//! [Search] is a "dynamic" position evaluation and the core of the engine.
//! It implements [Monte Carlo Tree Search] (MCTS): instead of sweeping the
//! game tree to a fixed depth, it grows a tree asymmetrically, spending its
//! budget on the lines that randomized playouts report as promising.
//!
//! One iteration selects a leaf by the UCT policy, expands it, plays out a
//! randomized continuation and propagates the result back to the root. The
//! loop runs until an iteration or time budget is spent or the caller
//! requests an abort, and always publishes the best move found so far.
//!
//! [Search]: https://www.chessprogramming.org/Search
//! [Monte Carlo Tree Search]: https://www.chessprogramming.org/Monte-Carlo_Tree_Search

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::environment::Environment;
use crate::evaluation::Evaluate;

mod mcts;
mod policy;
mod settings;
mod simulation;
mod tree;

use mcts::Search;
pub use settings::Settings;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured iteration budget was spent.
    IterationLimit,
    /// The configured wall-clock budget was spent.
    TimeLimit,
    /// The caller requested a cooperative abort.
    Aborted,
    /// The root position has no legal moves; there is nothing to search.
    NoLegalMoves,
}

/// Outcome of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchReport<M> {
    /// The chosen move. `None` means no move was decided: either the search
    /// was stopped before completing a single iteration, or the root had no
    /// legal moves — `stop` tells the two apart.
    pub best_move: Option<M>,
    /// Why the loop stopped.
    pub stop: StopReason,
    /// Completed select-expand-simulate-backpropagate passes.
    pub iterations: u64,
    /// Number of nodes materialized in the tree.
    pub nodes: usize,
}

/// Lifecycle of a search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run yet.
    Idle,
    /// The iteration loop is running.
    Running,
    /// The last search ran to the end of its budget.
    Completed,
    /// The last search was cut short by an abort request.
    Aborted,
}

const STATE_IDLE: u8 = 0;
const STATE_RUNNING: u8 = 1;
const STATE_COMPLETED: u8 = 2;
const STATE_ABORTED: u8 = 3;

/// Shared handle for cooperative cancellation and state observation.
///
/// This is the only state shared between a running search and its caller:
/// the caller writes the abort flag, the loop polls it at iteration
/// boundaries. Cancellation is non-preemptive — an in-flight iteration
/// always completes; the request only prevents the next one from starting.
#[derive(Debug, Clone, Default)]
pub struct Control {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    abort: AtomicBool,
    state: AtomicU8,
}

impl Control {
    /// Creates an idle handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a cooperative abort. Safe to call at any time, including
    /// before a search has started: a pending request cancels the next
    /// search before its first iteration.
    pub fn request_abort(&self) {
        self.shared.abort.store(true, Ordering::Release);
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        match self.shared.state.load(Ordering::Acquire) {
            STATE_IDLE => SearchState::Idle,
            STATE_RUNNING => SearchState::Running,
            STATE_COMPLETED => SearchState::Completed,
            _ => SearchState::Aborted,
        }
    }

    fn abort_requested(&self) -> bool {
        self.shared.abort.load(Ordering::Acquire)
    }

    pub(crate) fn enter(&self) {
        self.shared.state.store(STATE_RUNNING, Ordering::Release);
    }

    // The abort flag is consumed on exit: one request cancels exactly one
    // search, and the next invocation starts clean.
    pub(crate) fn leave(&self, aborted: bool) {
        self.shared.abort.store(false, Ordering::Release);
        let state = if aborted {
            STATE_ABORTED
        } else {
            STATE_COMPLETED
        };
        self.shared.state.store(state, Ordering::Release);
    }
}

/// Slack subtracted from the time budget so the loop stops before the limit
/// is actually breached.
const RESERVE: Duration = Duration::from_millis(100);

struct Limiter {
    timer: Instant,
    iterations: Option<u64>,
    time: Option<Duration>,
}

impl Limiter {
    /// Budget check, evaluated once per iteration boundary.
    fn stop_reason(&self, iterations: u64) -> Option<StopReason> {
        if let Some(cap) = self.iterations {
            if iterations >= cap {
                return Some(StopReason::IterationLimit);
            }
        }
        if let Some(limit) = self.time {
            if self.timer.elapsed() + RESERVE >= limit {
                return Some(StopReason::TimeLimit);
            }
        }
        None
    }
}

/// Runs the search from `root` until the budget is spent or `control`
/// requests an abort, and returns the report with the chosen move.
///
/// Progress and summary lines are written to `output` in the
/// `info …` format.
pub fn find_best_move<E, V, W>(
    root: E,
    evaluator: &V,
    settings: &Settings,
    control: &Control,
    output: &mut W,
) -> SearchReport<E::Move>
where
    E: Environment,
    V: Evaluate<E::Rollout>,
    W: Write,
{
    control.enter();
    let mut search = Search::new(root, settings);
    let report = search.run(evaluator, settings, control, output);
    control.leave(report.stop == StopReason::Aborted);
    report
}

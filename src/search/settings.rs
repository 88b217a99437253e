//! Search configuration.

use std::time::Duration;

use anyhow::ensure;

use crate::environment::Promotions;

/// Parameters for the MCTS search algorithm.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Exploration constant (`C` in the UCT formula). Higher values spread
    /// iterations across siblings, lower values commit to the current best.
    pub exploration: f32,
    /// Maximum number of plies a single playout may run before falling back
    /// to the evaluator.
    pub playout_depth: usize,
    /// Iteration budget; `None` leaves the search bounded only by time or an
    /// abort request.
    pub max_iterations: Option<u64>,
    /// Wall-clock budget; `None` disables the time check.
    pub move_time: Option<Duration>,
    /// Promotion kinds the move generator may emit at the root.
    pub promotions: Promotions,
    /// Run the search loop on a dedicated worker thread so the caller is not
    /// blocked.
    pub threaded: bool,
    /// Seed for the playout generator. Fixing it makes searches
    /// reproducible; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exploration: 1.0,
            playout_depth: 32,
            max_iterations: Some(10_000),
            move_time: None,
            promotions: Promotions::all(),
            threaded: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Checks that the configuration describes a runnable search.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite or negative exploration constant,
    /// or a zero playout depth.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.exploration.is_finite() && self.exploration >= 0.0,
            "exploration constant must be finite and non-negative, got {}",
            self.exploration
        );
        ensure!(
            self.playout_depth > 0,
            "playout depth limit must be at least 1"
        );
        Ok(())
    }
}

//! The engine puts the pieces together: it owns the settings, the evaluator
//! and the cancellation handle, and manages the lifecycle of one search at a
//! time.
//!
//! [`Engine::start_search`] runs the search inline or, when configured, on a
//! dedicated worker thread so the caller (a game loop, a UI) is not blocked.
//! Completion is published through a single callback carrying the
//! [`SearchReport`]; cancellation goes through [`Engine::request_abort`].

use std::io;
use std::panic;
use std::sync::Arc;
use std::thread;

use anyhow::bail;

use crate::environment::Environment;
use crate::evaluation::Evaluate;
use crate::search::{find_best_move, Control, SearchReport, SearchState, Settings};

/// Drives searches against a fixed evaluator.
///
/// The only state shared with a running worker is the [`Control`] handle;
/// the tree and all other search state are private to the invocation and
/// discarded when it finishes.
pub struct Engine<V> {
    settings: Settings,
    evaluator: Arc<V>,
    control: Control,
    worker: Option<thread::JoinHandle<()>>,
}

impl<V> Engine<V> {
    /// Creates an engine with the given evaluator and settings.
    pub fn new(evaluator: V, settings: Settings) -> Self {
        Self {
            settings,
            evaluator: Arc::new(evaluator),
            control: Control::new(),
            worker: None,
        }
    }

    /// Current search settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the settings. Changes apply to the next search.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Lifecycle state of the current or last search.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.control.state()
    }

    /// Sets the cooperative cancellation flag. The search stops at the next
    /// iteration boundary; an iteration that is already underway completes.
    /// Safe to call at any time, including before a search has started.
    pub fn request_abort(&self) {
        self.control.request_abort();
    }

    /// Blocks until an outstanding worker thread finishes. A panic on the
    /// worker (a failing collaborator) is resumed on the caller.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            if let Err(reason) = worker.join() {
                panic::resume_unwind(reason);
            }
        }
    }

    /// Starts a search from `root` and fires `on_complete` exactly once with
    /// the report. Runs inline unless [`Settings::threaded`] is set, in
    /// which case the call returns immediately and the report arrives on the
    /// worker thread.
    ///
    /// # Errors
    ///
    /// Fails when the settings do not validate or a search is already
    /// running.
    pub fn start_search<E, F>(&mut self, root: E, on_complete: F) -> anyhow::Result<()>
    where
        E: Environment + Send + 'static,
        V: Evaluate<E::Rollout> + Send + Sync + 'static,
        F: FnOnce(SearchReport<E::Move>) + Send + 'static,
    {
        self.settings.validate()?;
        if self.state() == SearchState::Running {
            bail!("a search is already running");
        }
        // Reap a finished worker before starting the next search.
        self.wait();

        self.control.enter();
        if self.settings.threaded {
            let evaluator = Arc::clone(&self.evaluator);
            let settings = self.settings.clone();
            let control = self.control.clone();
            self.worker = Some(thread::spawn(move || {
                let report =
                    find_best_move(root, evaluator.as_ref(), &settings, &control, &mut io::stdout());
                on_complete(report);
            }));
        } else {
            let report = find_best_move(
                root,
                self.evaluator.as_ref(),
                &self.settings,
                &self.control,
                &mut io::stdout(),
            );
            on_complete(report);
        }
        Ok(())
    }
}

impl<V> Drop for Engine<V> {
    fn drop(&mut self) {
        // Do not leave a detached worker searching for a caller that is
        // gone.
        self.request_abort();
        if let Some(worker) = self.worker.take() {
            drop(worker.join());
        }
    }
}

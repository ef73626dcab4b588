//! Debounced driver for a [`ListingFilter`].
//!
//! A search screen emits an edit per keystroke or slider tick. The session
//! stages those edits and only re-filters once the input has been quiet for
//! the configured window, publishing each new result on a watch channel.

use crate::filter::{CriteriaUpdate, ListingFilter, PendingCriteria};
use crate::models::Listing;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Idle time after the last edit before results are recomputed
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
enum Command {
    Update(CriteriaUpdate),
    Reset,
}

/// One published result.
#[derive(Debug, Clone, Default)]
pub struct ResultSnapshot {
    /// Bumped on every recomputation; 0 is the unfiltered initial set
    pub generation: u64,
    pub listings: Vec<Listing>,
}

impl ResultSnapshot {
    fn capture(generation: u64, filter: &ListingFilter) -> Self {
        Self {
            generation,
            listings: filter.current_results().into_iter().cloned().collect(),
        }
    }
}

/// Handle to a running session task.
pub struct SearchSession {
    commands: mpsc::UnboundedSender<Command>,
    results: watch::Receiver<ResultSnapshot>,
    task: JoinHandle<ListingFilter>,
}

impl SearchSession {
    /// Start a session task on the current tokio runtime.
    pub fn spawn(filter: ListingFilter, quiescence: Duration) -> Self {
        let (commands, rx) = mpsc::unbounded_channel();
        let (results_tx, results) = watch::channel(ResultSnapshot::capture(0, &filter));
        let task = tokio::spawn(run(filter, quiescence, rx, results_tx));

        Self {
            commands,
            results,
            task,
        }
    }

    /// Stage one field edit. Ignored once the session has stopped.
    pub fn update(&self, update: CriteriaUpdate) {
        let _ = self.commands.send(Command::Update(update));
    }

    pub fn reset(&self) {
        let _ = self.commands.send(Command::Reset);
    }

    /// Receiver for published results
    pub fn results(&self) -> watch::Receiver<ResultSnapshot> {
        self.results.clone()
    }

    /// Flush anything still staged, stop the task and return the engine.
    pub async fn shutdown(self) -> Result<ListingFilter> {
        drop(self.commands);
        self.task.await.context("Search session task failed")
    }
}

async fn run(
    mut filter: ListingFilter,
    quiescence: Duration,
    mut rx: mpsc::UnboundedReceiver<Command>,
    results: watch::Sender<ResultSnapshot>,
) -> ListingFilter {
    let mut pending = PendingCriteria::new();
    let mut generation = 0;

    // Wait for the first edit of a burst, then keep absorbing edits until the
    // channel has been quiet for a full window.
    while let Some(command) = rx.recv().await {
        stage(&mut pending, command);

        let mut closed = false;
        loop {
            tokio::select! {
                next = rx.recv() => match next {
                    Some(command) => stage(&mut pending, command),
                    None => {
                        closed = true;
                        break;
                    }
                },
                _ = tokio::time::sleep(quiescence) => break,
            }
        }

        let staged = pending.len();
        filter.apply_pending(&mut pending);
        generation += 1;
        debug!(
            "Applied {} staged edits, {} listings visible (generation {})",
            staged,
            filter.result_count(),
            generation
        );
        results.send_replace(ResultSnapshot::capture(generation, &filter));

        if closed {
            break;
        }
    }

    info!("Search session stopped after {} recomputations", generation);
    filter
}

fn stage(pending: &mut PendingCriteria, command: Command) {
    match command {
        Command::Update(update) => pending.stage(update),
        Command::Reset => pending.stage_reset(),
    }
}

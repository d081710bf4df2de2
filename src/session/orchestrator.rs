//! Search Orchestrator
//!
//! Turns query changes into ticketed searches. Keystrokes are debounced; submits,
//! suggestion taps and quick searches skip the debounce. Either way the lookup runs on
//! its own task and reports back through `StateHub::settle`, which discards it unless
//! its ticket is still authoritative.

use super::hub::StateHub;
use super::types::{Dispatch, SearchState, Ticket};
use crate::search::pipeline::SearchPipeline;
use crate::search::types::SearchOutcome;

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct SearchOrchestrator {
    pipeline: SearchPipeline,
    hub: Arc<StateHub>,
    debounce: Duration,
    /// The debounce timer for the latest keystroke, if it has not fired yet.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchOrchestrator {
    pub fn new(pipeline: SearchPipeline, hub: Arc<StateHub>, debounce: Duration) -> Arc<Self> {
        Arc::new(Self {
            pipeline,
            hub,
            debounce,
            pending: Mutex::new(None),
        })
    }

    pub fn hub(&self) -> &Arc<StateHub> {
        &self.hub
    }

    /// Debounced dispatch for a query change.
    ///
    /// `update` is applied to the state in the same transaction. A blank query cancels
    /// the pending timer and publishes empty results without touching the pipeline.
    pub fn schedule(self: &Arc<Self>, query: &str, update: impl FnOnce(&mut SearchState)) {
        let Some(generation) = self.hub.defer(query, update) else {
            self.cancel_pending();
            tracing::debug!("Blank query, search cleared");
            return;
        };

        let orchestrator = Arc::clone(self);
        let query = query.to_string();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(orchestrator.debounce).await;

            match orchestrator.hub.open(&query, Some(generation), |_| {}) {
                Dispatch::Started(ticket) => {
                    tracing::debug!("Debounce settled, dispatching {:?}", ticket.term);
                    orchestrator.spawn_resolve(ticket);
                }
                Dispatch::Superseded | Dispatch::Cleared => {}
            }
        });

        // Older timers are left to wake up and find their generation superseded.
        *self.pending.lock() = Some(timer);
    }

    /// Immediate dispatch, bypassing the debounce window.
    ///
    /// Returns the lookup task, or `None` when the query was blank and empty results
    /// were published instead.
    pub fn dispatch_now(
        self: &Arc<Self>,
        query: &str,
        update: impl FnOnce(&mut SearchState),
    ) -> Option<JoinHandle<Option<SearchOutcome>>> {
        self.cancel_pending();

        match self.hub.open(query, None, update) {
            Dispatch::Started(ticket) => {
                tracing::debug!("Dispatching {:?} immediately", ticket.term);
                Some(self.spawn_resolve(ticket))
            }
            Dispatch::Cleared | Dispatch::Superseded => None,
        }
    }

    fn spawn_resolve(self: &Arc<Self>, ticket: Ticket) -> JoinHandle<Option<SearchOutcome>> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move { orchestrator.resolve(ticket).await })
    }

    /// Runs the pipeline for `ticket` and publishes the outcome if still authoritative.
    async fn resolve(&self, ticket: Ticket) -> Option<SearchOutcome> {
        let outcome = self.pipeline.run(&ticket.term).await;

        if self.hub.settle(&ticket, &outcome) {
            tracing::debug!(
                "Published {} results for {:?}",
                outcome.results().len(),
                ticket.term
            );
            Some(outcome)
        } else {
            tracing::debug!("Dropping stale results for {:?}", ticket.term);
            None
        }
    }

    fn cancel_pending(&self) {
        if let Some(timer) = self.pending.lock().take() {
            timer.abort();
        }
    }
}

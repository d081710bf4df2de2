//! Search Bar Controller
//!
//! The input/presentation controller a hosting screen drives with UI events. Each event
//! updates `SearchState` as one unit; suggestions are recomputed synchronously while
//! the provider search itself goes through the orchestrator.

use super::hub::StateHub;
use super::orchestrator::SearchOrchestrator;
use super::types::{SearchPhase, SearchState, SessionListeners};
use crate::catalog::service_catalog::CatalogHandle;
use crate::config::SearchConfig;
use crate::search::pipeline::SearchPipeline;
use crate::search::suggest::suggest;
use crate::search::types::SearchOutcome;

use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct SearchBarController {
    hub: Arc<StateHub>,
    orchestrator: Arc<SearchOrchestrator>,
    catalog: CatalogHandle,
    max_suggestions: usize,
}

impl SearchBarController {
    /// Builds a controller. Must be called within a Tokio runtime before any event that
    /// dispatches a search.
    pub fn new(pipeline: SearchPipeline, config: &SearchConfig, listeners: SessionListeners) -> Self {
        let catalog = pipeline.catalog().clone();
        let hub = Arc::new(StateHub::new(listeners, config.history_limit));
        let orchestrator = SearchOrchestrator::new(pipeline, hub.clone(), config.debounce());

        Self {
            hub,
            orchestrator,
            catalog,
            max_suggestions: config.max_suggestions,
        }
    }

    pub fn state(&self) -> SearchState {
        self.hub.state()
    }

    pub fn phase(&self) -> SearchPhase {
        self.hub.phase()
    }

    /// Distinct recently searched terms, most recent first.
    pub fn recent_searches(&self) -> Vec<String> {
        self.hub.recent_searches()
    }

    /// Text-change event: refresh suggestions now, search after the debounce window.
    pub fn on_query_change(&self, text: &str) {
        let catalog = self.catalog.catalog();
        let suggestions = suggest(text, &catalog, self.max_suggestions);

        self.orchestrator.schedule(text, |state| {
            state.query = text.to_string();
            state.filtered_suggestions = suggestions;
            state.refresh_visibility();
        });
    }

    /// Suggestion tap: adopt the suggestion as the query and search for it right away.
    pub fn on_suggestion_selected(&self, suggestion: &str) -> Option<JoinHandle<Option<SearchOutcome>>> {
        tracing::debug!("Suggestion selected: {:?}", suggestion);
        self.adopt_and_dispatch(suggestion)
    }

    /// Popular or recent search chip. Behaves like a suggestion tap.
    pub fn quick_search(&self, term: &str) -> Option<JoinHandle<Option<SearchOutcome>>> {
        self.adopt_and_dispatch(term)
    }

    /// Replaces the query with `term`, hides the dropdown and dispatches immediately.
    /// Suggestions are recomputed for `term` so a later focus shows the right list.
    fn adopt_and_dispatch(&self, term: &str) -> Option<JoinHandle<Option<SearchOutcome>>> {
        let catalog = self.catalog.catalog();
        let suggestions = suggest(term, &catalog, self.max_suggestions);

        self.orchestrator.dispatch_now(term, |state| {
            state.query = term.to_string();
            state.filtered_suggestions = suggestions;
            state.show_suggestions = false;
        })
    }

    /// Submit (return key): search the current query without waiting for the debounce.
    pub fn on_submit(&self) -> Option<JoinHandle<Option<SearchOutcome>>> {
        let query = self.hub.state().query;
        self.orchestrator.dispatch_now(&query, |state| {
            state.show_suggestions = false;
        })
    }

    /// Clear button: empty the query, hide suggestions and publish no results.
    pub fn on_clear(&self) {
        let _ = self.orchestrator.dispatch_now("", |state| {
            state.query.clear();
            state.filtered_suggestions.clear();
            state.show_suggestions = false;
        });
    }

    pub fn on_focus(&self) {
        self.hub.apply(|state| {
            state.is_focused = true;
            state.refresh_visibility();
        });
    }

    /// Blur hides suggestions but keeps the query and any in-flight search.
    pub fn on_blur(&self) {
        self.hub.apply(|state| {
            state.is_focused = false;
            state.refresh_visibility();
        });
    }
}

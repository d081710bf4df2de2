use crate::search::types::SearchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a host needs to render the search bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub filtered_suggestions: Vec<String>,
    pub show_suggestions: bool,
    pub is_focused: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_search_term: Option<String>,
}

impl SearchState {
    /// Suggestions are visible only while focused, with a non-blank query and at least
    /// one suggestion.
    pub fn refresh_visibility(&mut self) {
        self.show_suggestions =
            self.is_focused && !self.filtered_suggestions.is_empty() && !self.query.trim().is_empty();
    }
}

/// Lifecycle of the most recent search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPhase {
    Idle,
    /// A query is waiting out the debounce window.
    Debouncing,
    /// A ticket has been dispatched and has not settled.
    InFlight,
    /// Published results (possibly none) from a healthy lookup, or a blank query.
    Resolved,
    /// The remote lookup failed; local results were published.
    FallenBack,
    /// The remote lookup failed and the local fallback had nothing either.
    Failed,
}

/// Identifies one dispatched search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    /// The term as typed, trimmed.
    pub term: String,
}

/// Result of asking the hub to start a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Started(Ticket),
    /// The term was blank; empty results were published instead.
    Cleared,
    /// A newer keystroke replaced this debounced query before it fired.
    Superseded,
}

pub type StateCallback = Arc<dyn Fn(&SearchState) + Send + Sync>;
pub type ResultsCallback = Arc<dyn Fn(&[SearchResult]) + Send + Sync>;

/// Host callbacks.
///
/// Both run synchronously on the task that produced the change, in the order changes
/// were made. They may read controller state and may dispatch further events.
#[derive(Clone, Default)]
pub struct SessionListeners {
    pub on_state: Option<StateCallback>,
    pub on_results: Option<ResultsCallback>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_state<F>(mut self, callback: F) -> Self
    where
        F: Fn(&SearchState) + Send + Sync + 'static,
    {
        self.on_state = Some(Arc::new(callback));
        self
    }

    pub fn on_results<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[SearchResult]) + Send + Sync + 'static,
    {
        self.on_results = Some(Arc::new(callback));
        self
    }
}

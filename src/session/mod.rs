//! Search Session Module
//!
//! Drives one search bar: keystrokes, focus, suggestion taps and clears go in; a
//! consistent `SearchState` and ranked result lists come out through callbacks.
//!
//! ## Ordering Model
//! Every search that leaves the debounce window is issued a ticket. Only the ticket
//! recorded as authoritative may publish its outcome; a newer dispatch, a clear, or a
//! blank query replaces it, and whatever the superseded lookup eventually returns is
//! dropped. In-flight lookups are never aborted, only ignored.
//!
//! ## Submodules
//! - **`types`**: `SearchState`, `SearchPhase`, tickets and listener callbacks.
//! - **`hub`**: The single lock-protected session record and callback delivery.
//! - **`orchestrator`**: Debounce timers and ticketed dispatch into the `SearchPipeline`.
//! - **`controller`**: The input/presentation controller hosts talk to.
//! - **`history`**: Recent distinct search terms.

pub mod controller;
pub mod history;
pub mod hub;
pub mod orchestrator;
pub mod types;

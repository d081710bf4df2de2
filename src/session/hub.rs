//! Session State Hub
//!
//! Holds the search bar's `SearchState` together with the bookkeeping that decides
//! which search is allowed to publish: the debounce generation and the authoritative
//! ticket. Every event is one transaction on this record, and its observable effects
//! (state callback, then results callback) are delivered before the next transaction
//! can deliver anything.

use super::history::SearchHistory;
use super::types::{Dispatch, SearchPhase, SearchState, SessionListeners, Ticket};
use crate::search::tokenizer::normalize;
use crate::search::types::{SearchOutcome, SearchResult};

use parking_lot::{Mutex, ReentrantMutex};
use std::cell::RefCell;
use std::collections::VecDeque;

struct Session {
    state: SearchState,
    phase: SearchPhase,
    /// Bumped by every keystroke, immediate dispatch and clear.
    generation: u64,
    next_ticket: u64,
    authoritative: Option<Ticket>,
}

impl Session {
    fn clear(&mut self) {
        self.authoritative = None;
        self.phase = SearchPhase::Resolved;
        self.state.is_loading = false;
        self.state.error = None;
    }

    fn start(&mut self, term: &str) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket {
            id: self.next_ticket,
            term: term.to_string(),
        };

        self.authoritative = Some(ticket.clone());
        self.phase = SearchPhase::InFlight;
        self.state.is_loading = true;
        self.state.error = None;
        self.state.last_search_term = Some(ticket.term.clone());
        ticket
    }
}

#[derive(Default)]
struct Delivery {
    state: Option<SearchState>,
    results: Option<Vec<SearchResult>>,
}

/// Deliveries waiting for the outermost transaction on this thread to hand them out.
#[derive(Default)]
struct Outbox {
    pending: VecDeque<Delivery>,
    draining: bool,
}

pub struct StateHub {
    session: Mutex<Session>,
    /// Serializes callback delivery. Re-entrant so callbacks may raise new events;
    /// those land in the outbox behind the delivery in progress.
    outbox: ReentrantMutex<RefCell<Outbox>>,
    history: Mutex<SearchHistory>,
    listeners: SessionListeners,
}

impl StateHub {
    pub fn new(listeners: SessionListeners, history_limit: usize) -> Self {
        Self {
            session: Mutex::new(Session {
                state: SearchState::default(),
                phase: SearchPhase::Idle,
                generation: 0,
                next_ticket: 0,
                authoritative: None,
            }),
            outbox: ReentrantMutex::new(RefCell::new(Outbox::default())),
            history: Mutex::new(SearchHistory::new(history_limit)),
            listeners,
        }
    }

    pub fn state(&self) -> SearchState {
        self.session.lock().state.clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.session.lock().phase
    }

    /// The ticket currently allowed to publish, if any.
    pub fn authoritative(&self) -> Option<Ticket> {
        self.session.lock().authoritative.clone()
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.history.lock().terms()
    }

    /// Commits one event and delivers its effects in commit order.
    ///
    /// A transaction raised from inside a callback only queues its delivery; the
    /// outermost transaction drains the queue once the current delivery is complete.
    fn transact<R>(&self, apply: impl FnOnce(&mut Session, &mut Delivery) -> R) -> R {
        let outbox = self.outbox.lock();
        let mut delivery = Delivery::default();
        let outcome = {
            let mut session = self.session.lock();
            apply(&mut session, &mut delivery)
        };

        {
            let mut queued = outbox.borrow_mut();
            queued.pending.push_back(delivery);
            if queued.draining {
                return outcome;
            }
            queued.draining = true;
        }

        loop {
            let next = outbox.borrow_mut().pending.pop_front();
            let Some(delivery) = next else { break };
            self.deliver(&delivery);
        }
        outbox.borrow_mut().draining = false;

        outcome
    }

    fn deliver(&self, delivery: &Delivery) {
        if let (Some(state), Some(callback)) = (&delivery.state, &self.listeners.on_state) {
            callback(state);
        }
        if let (Some(results), Some(callback)) = (&delivery.results, &self.listeners.on_results) {
            callback(results);
        }
    }

    /// Applies a presentation-only change (focus, blur).
    pub fn apply(&self, update: impl FnOnce(&mut SearchState)) {
        self.transact(|session, delivery| {
            update(&mut session.state);
            delivery.state = Some(session.state.clone());
        });
    }

    /// Records a keystroke whose search will be dispatched after the debounce window.
    ///
    /// Returns the generation the timer must still match when it fires, or `None` when
    /// the query is blank, in which case empty results were published immediately.
    pub fn defer(&self, query: &str, update: impl FnOnce(&mut SearchState)) -> Option<u64> {
        self.transact(|session, delivery| {
            session.generation += 1;
            update(&mut session.state);

            let generation = if normalize(query).is_empty() {
                session.clear();
                delivery.results = Some(Vec::new());
                None
            } else {
                session.phase = SearchPhase::Debouncing;
                Some(session.generation)
            };

            delivery.state = Some(session.state.clone());
            generation
        })
    }

    /// Starts a search for `query`, making its ticket authoritative.
    ///
    /// With `expected_generation` set (a debounce timer firing), nothing happens unless
    /// no newer keystroke arrived meanwhile. Without it (submit, suggestion tap, clear)
    /// any pending debounce is superseded.
    pub fn open(
        &self,
        query: &str,
        expected_generation: Option<u64>,
        update: impl FnOnce(&mut SearchState),
    ) -> Dispatch {
        self.transact(|session, delivery| {
            match expected_generation {
                Some(generation) if generation != session.generation => {
                    return Dispatch::Superseded;
                }
                Some(_) => {}
                None => session.generation += 1,
            }

            update(&mut session.state);

            let term = query.trim();
            let dispatch = if normalize(term).is_empty() {
                session.clear();
                delivery.results = Some(Vec::new());
                Dispatch::Cleared
            } else {
                Dispatch::Started(session.start(term))
            };

            delivery.state = Some(session.state.clone());
            dispatch
        })
    }

    /// Publishes `outcome` if `ticket` is still authoritative.
    ///
    /// Returns `false` (and changes nothing) for superseded tickets.
    pub fn settle(&self, ticket: &Ticket, outcome: &SearchOutcome) -> bool {
        self.transact(|session, delivery| {
            if session.authoritative.as_ref().map(|current| current.id) != Some(ticket.id) {
                return false;
            }

            session.authoritative = None;
            // A newer keystroke may be waiting out its debounce; its phase stands.
            if session.phase == SearchPhase::InFlight {
                session.phase = match outcome {
                    SearchOutcome::FallenBack { results, .. } if results.is_empty() => {
                        SearchPhase::Failed
                    }
                    SearchOutcome::FallenBack { .. } => SearchPhase::FallenBack,
                    SearchOutcome::Empty
                    | SearchOutcome::Resolved { .. }
                    | SearchOutcome::NoMatches { .. } => SearchPhase::Resolved,
                };
            }
            session.state.is_loading = false;
            session.state.error = outcome.message();

            if let Some(term) = outcome.term() {
                self.history.lock().record(term);
            }

            delivery.state = Some(session.state.clone());
            delivery.results = Some(outcome.results().to_vec());
            true
        })
    }
}

//! Test doubles for the provider store.

use super::types::{FetchFuture, ProviderStore};
use crate::catalog::types::ProviderDocument;

use parking_lot::Mutex;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Builds a raw provider document.
pub(crate) fn provider_doc(id: &str, name: &str, services: &[&str]) -> ProviderDocument {
    ProviderDocument::new(
        id,
        json!({
            "name": name,
            "phone": "+10000000000",
            "services": services,
            "profileViews": 0,
            "contactsReceived": 0,
        }),
    )
}

/// One scripted reply to `fetch_all`.
pub(crate) enum Step {
    Respond {
        delay: Duration,
        docs: Vec<ProviderDocument>,
    },
    Fail {
        delay: Duration,
        message: String,
    },
}

/// A store that replays scripted replies in call order, then keeps returning
/// `default_docs` without delay.
pub(crate) struct ScriptedStore {
    steps: Mutex<VecDeque<Step>>,
    default_docs: Vec<ProviderDocument>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    pub(crate) fn returning(docs: Vec<ProviderDocument>) -> Arc<Self> {
        Self::scripted(Vec::new(), docs)
    }

    pub(crate) fn scripted(steps: Vec<Step>, default_docs: Vec<ProviderDocument>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            default_docs,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProviderStore for ScriptedStore {
    fn fetch_all(&self) -> FetchFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front().unwrap_or_else(|| Step::Respond {
            delay: Duration::ZERO,
            docs: self.default_docs.clone(),
        });

        Box::pin(async move {
            match step {
                Step::Respond { delay, docs } => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Ok(docs)
                }
                Step::Fail { delay, message } => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Err(anyhow::anyhow!(message))
                }
            }
        })
    }
}

//! HTTP Provider Store
//!
//! Reads another node's provider collection over HTTP. Transient failures are retried
//! under a `RetryPolicy` (exponential backoff plus jitter); callers still impose their
//! own overall timeout.

use super::protocol::{ENDPOINT_PROVIDERS, ProvidersResponse};
use super::types::{FetchFuture, ProviderStore};
use crate::catalog::types::ProviderDocument;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// How `HttpProviderStore` retries a failed collection read.
///
/// Connection errors and 5xx replies are retried; any other non-success status
/// fails immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub attempts: usize,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Upper bound of the random delay added to every backoff.
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_backoff: Duration::from_millis(150),
            max_backoff: Duration::from_millis(1200),
            jitter: Duration::from_millis(50),
        }
    }
}

impl RetryPolicy {
    /// Backoff before retry number `retry` (0-based), without jitter.
    pub fn backoff(&self, retry: usize) -> Duration {
        let factor = 1u32.checked_shl(retry as u32).unwrap_or(u32::MAX);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    fn jittered(&self, retry: usize) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            rand::random::<u64>() % jitter_ms
        };
        self.backoff(retry) + Duration::from_millis(extra)
    }
}

enum Attempt {
    Done(Vec<ProviderDocument>),
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

pub struct HttpProviderStore {
    base_url: String,
    http_client: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpProviderStore {
    pub fn new(base_url: &str) -> Self {
        Self::with_retry(base_url, RetryPolicy::default())
    }

    pub fn with_retry(base_url: &str, retry: RetryPolicy) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    async fn read_once(&self, url: &str) -> Attempt {
        let response = match self
            .http_client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Attempt::Retryable(e.into()),
        };

        let status = response.status();
        if status.is_server_error() {
            return Attempt::Retryable(anyhow::anyhow!("Provider fetch failed {}", status));
        }
        if !status.is_success() {
            return Attempt::Fatal(anyhow::anyhow!("Provider fetch failed {}", status));
        }

        match response.json::<ProvidersResponse>().await {
            Ok(body) => Attempt::Done(body.providers),
            Err(e) => Attempt::Fatal(e.into()),
        }
    }

    /// Fetches the full remote collection, retrying per the store's `RetryPolicy`.
    pub async fn fetch_documents(&self) -> Result<Vec<ProviderDocument>> {
        let url = format!("{}{}", self.base_url, ENDPOINT_PROVIDERS);
        let attempts = self.retry.attempts.max(1);

        let mut retry = 0;
        loop {
            match self.read_once(&url).await {
                Attempt::Done(docs) => return Ok(docs),
                Attempt::Fatal(e) => return Err(e),
                Attempt::Retryable(e) if retry + 1 >= attempts => return Err(e),
                Attempt::Retryable(e) => {
                    let wait = self.retry.jittered(retry);
                    tracing::debug!(
                        "GET {} failed (attempt {}/{}), retrying in {:?}: {}",
                        url,
                        retry + 1,
                        attempts,
                        wait,
                        e
                    );
                    tokio::time::sleep(wait).await;
                    retry += 1;
                }
            }
        }
    }

    /// Polls the remote collection and republishes it whenever it changes.
    ///
    /// Failed polls are logged and skipped; the last good snapshot stays current.
    pub fn spawn_poller(
        self: Arc<Self>,
        every: Duration,
    ) -> (watch::Receiver<Vec<ProviderDocument>>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(Vec::new());

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);

            loop {
                interval.tick().await;

                match self.fetch_documents().await {
                    Ok(docs) => {
                        let changed = tx.send_if_modified(|current| {
                            if *current == docs {
                                return false;
                            }
                            *current = docs;
                            true
                        });
                        if changed {
                            tracing::debug!("Remote provider collection changed");
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Polling {} failed: {}", self.base_url, e);
                    }
                }

                if tx.is_closed() {
                    tracing::info!("No catalog watchers left, stopping poller");
                    break;
                }
            }
        });

        (rx, handle)
    }
}

impl ProviderStore for HttpProviderStore {
    fn fetch_all(&self) -> FetchFuture<'_> {
        Box::pin(self.fetch_documents())
    }
}

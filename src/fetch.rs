// Fetch worker - the only component that talks to the catalog API
//
// Runs as a background tokio task. Receives FetchRequests over an mpsc
// channel, performs the HTTP GET + JSON decode, and delivers FetchOutcomes
// back over a second channel. Rapid request bursts (live search typing) are
// debounced: the worker waits out a quiet window and serves only the newest
// pending request. Failures are values in the outcome, never panics.

use crate::events::{FetchOutcome, FetchRequest};
use crate::spell::SpellRecord;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Errors that can occur during one fetch cycle.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure: unreachable host, connection reset, timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered, but not with success.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body did not match the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Build the request URL for a catalog fetch.
///
/// Trims surrounding whitespace from the query. Empty query = the unfiltered
/// collection endpoint; otherwise the trimmed query goes into a `Name`
/// parameter with spaces escaped as `%20` (the only characters the upstream
/// API needs escaped).
pub fn build_spells_url(base: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    let query = query.trim();

    if query.is_empty() {
        format!("{base}/Spells")
    } else {
        format!("{base}/Spells?Name={}", query.replace(' ', "%20"))
    }
}

/// Anything that can answer a catalog query. The real implementation is
/// `SpellClient`; demo mode substitutes a bundled sample set.
pub trait CatalogSource {
    fn fetch(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SpellRecord>, FetchError>> + Send;
}

/// HTTP client for the spell catalog.
pub struct SpellClient {
    client: reqwest::Client,
    api_url: String,
}

impl SpellClient {
    /// Build the client with a request timeout. The original left timeouts
    /// unconfigured, which turns an unreachable host into an indefinite hang.
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    /// One request/decode cycle. Decoding goes through the raw body (rather
    /// than `Response::json`) so transport and decode failures stay distinct.
    pub async fn fetch_spells(&self, query: &str) -> Result<Vec<SpellRecord>, FetchError> {
        let url = build_spells_url(&self.api_url, query);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        SpellRecord::decode_list(&body).map_err(FetchError::Decode)
    }
}

impl CatalogSource for SpellClient {
    async fn fetch(&self, query: &str) -> Result<Vec<SpellRecord>, FetchError> {
        self.fetch_spells(query).await
    }
}

/// Worker loop: debounce, coalesce to the newest request, fetch, report.
///
/// Exits when the request channel closes (app shutdown) or the outcome
/// channel is dropped (TUI gone).
pub async fn run_fetcher<S: CatalogSource>(
    source: S,
    mut request_rx: mpsc::Receiver<FetchRequest>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    debounce: Duration,
) {
    while let Some(mut request) = request_rx.recv().await {
        // Debounce window: every newer request restarts the timer and
        // replaces the pending one. A closed channel ends the wait early so
        // the final request still gets served.
        if !debounce.is_zero() {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(debounce) => break,
                    newer = request_rx.recv() => match newer {
                        Some(newer) => request = newer,
                        None => break,
                    },
                }
            }
        }
        // Serve only the newest request already queued.
        while let Ok(newer) = request_rx.try_recv() {
            request = newer;
        }

        let started = Instant::now();
        let result = source.fetch(&request.query).await;
        let duration = started.elapsed();

        match &result {
            Ok(spells) => {
                tracing::debug!(
                    "fetched {} spells for query {:?} in {:?}",
                    spells.len(),
                    request.query,
                    duration
                );
            }
            Err(e) => {
                tracing::warn!("fetch failed for query {:?}: {}", request.query, e);
            }
        }

        let outcome = FetchOutcome {
            generation: request.generation,
            query: request.query,
            duration,
            result,
        };
        if outcome_tx.send(outcome).await.is_err() {
            break;
        }
    }

    tracing::debug!("fetch worker shut down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const BASE: &str = "https://wizard-world-api.herokuapp.com";

    #[test]
    fn empty_query_hits_the_bare_collection() {
        assert_eq!(
            build_spells_url(BASE, ""),
            "https://wizard-world-api.herokuapp.com/Spells"
        );
    }

    #[test]
    fn whitespace_only_query_is_treated_as_empty() {
        assert_eq!(
            build_spells_url(BASE, "   \t "),
            "https://wizard-world-api.herokuapp.com/Spells"
        );
    }

    #[test]
    fn query_is_trimmed_and_space_escaped() {
        assert_eq!(
            build_spells_url(BASE, "  wingardium leviosa  "),
            "https://wizard-world-api.herokuapp.com/Spells?Name=wingardium%20leviosa"
        );
    }

    #[test]
    fn single_word_query_passes_through() {
        assert_eq!(
            build_spells_url(BASE, "accio"),
            "https://wizard-world-api.herokuapp.com/Spells?Name=accio"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        assert_eq!(build_spells_url("http://localhost:3000/", "x"), "http://localhost:3000/Spells?Name=x");
    }

    /// Stub source that records every query it is asked to serve.
    #[derive(Clone)]
    struct RecordingSource {
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSource {
        fn new() -> Self {
            Self {
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl CatalogSource for RecordingSource {
        async fn fetch(&self, query: &str) -> Result<Vec<SpellRecord>, FetchError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn worker_serves_a_request() {
        let source = RecordingSource::new();
        let (request_tx, request_rx) = mpsc::channel(16);
        let (outcome_tx, mut outcome_rx) = mpsc::channel(16);

        let worker = tokio::spawn(run_fetcher(source.clone(), request_rx, outcome_tx, Duration::ZERO));

        request_tx
            .send(FetchRequest {
                generation: 1,
                query: "lumos".to_string(),
            })
            .await
            .unwrap();

        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(outcome.generation, 1);
        assert_eq!(outcome.query, "lumos");
        assert!(outcome.result.is_ok());

        drop(request_tx);
        worker.await.unwrap();
        assert_eq!(*source.queries.lock().unwrap(), vec!["lumos"]);
    }

    #[tokio::test]
    async fn debounce_coalesces_to_the_newest_request() {
        let source = RecordingSource::new();
        let (request_tx, request_rx) = mpsc::channel(16);
        let (outcome_tx, mut outcome_rx) = mpsc::channel(16);

        let worker = tokio::spawn(run_fetcher(
            source.clone(),
            request_rx,
            outcome_tx,
            Duration::from_millis(50),
        ));

        // A typing burst: three requests inside one debounce window.
        for (generation, query) in [(1, "l"), (2, "lu"), (3, "lumos")] {
            request_tx
                .send(FetchRequest {
                    generation,
                    query: query.to_string(),
                })
                .await
                .unwrap();
        }
        drop(request_tx);

        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(outcome.generation, 3);
        assert_eq!(outcome.query, "lumos");

        worker.await.unwrap();
        // Only the final query ever reached the source.
        assert_eq!(*source.queries.lock().unwrap(), vec!["lumos"]);
    }

    #[tokio::test]
    async fn worker_exits_when_requests_close() {
        let source = RecordingSource::new();
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>(1);
        let (outcome_tx, _outcome_rx) = mpsc::channel(1);

        let worker = tokio::spawn(run_fetcher(source, request_rx, outcome_tx, Duration::ZERO));
        drop(request_tx);
        worker.await.unwrap();
    }
}

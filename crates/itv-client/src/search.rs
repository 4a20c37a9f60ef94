//! HTTP client for the search orchestrator.
//!
//! The orchestrator fans out to the regional services and answers with a
//! `{"status": ..., "results": [...]}` envelope. This client turns that
//! envelope into normalized stations or a typed failure.

use itv_core::{AppConfig, SearchCriteria, StationCollection};
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::http::{build_http_client, parse_endpoint, read_json};
use crate::normalize::normalize_all;
use crate::types::{SearchResponse, STATUS_OK, STATUS_SUCCESS};

/// Message used when the service reports failure without explaining it.
const NO_RESULTS_MESSAGE: &str = "no results";

/// A search the orchestrator answered successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matching stations, normalized and capped.
    Found(StationCollection),
    /// The orchestrator is up but has no station data loaded.
    EmptyDataset,
}

impl SearchOutcome {
    /// The stations to display; empty for [`SearchOutcome::EmptyDataset`].
    #[must_use]
    pub fn into_stations(self) -> StationCollection {
        match self {
            SearchOutcome::Found(stations) => stations,
            SearchOutcome::EmptyDataset => StationCollection::empty(),
        }
    }
}

/// Client for the search orchestrator endpoint.
///
/// Use [`SearchClient::new`] with the application config, or
/// [`SearchClient::with_endpoint`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client for the configured search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if the endpoint does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_endpoint(
            &config.search_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built
    /// or [`ClientError::InvalidUrl`] if `search_url` does not parse.
    pub fn with_endpoint(
        search_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            endpoint: parse_endpoint(search_url)?,
        })
    }

    /// Fetches the unfiltered station list used to seed the map.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] when the
    ///   endpoint is unreachable, answers non-2xx, or sends a malformed body.
    /// - [`ClientError::Application`] when the service reports a failure.
    pub async fn load_all(&self) -> Result<SearchOutcome, ClientError> {
        self.fetch(self.endpoint.clone()).await
    }

    /// Runs a filtered search.
    ///
    /// All four filters are always sent; absent ones as empty strings.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] when the
    ///   endpoint is unreachable, answers non-2xx, or sends a malformed body.
    /// - [`ClientError::Application`] when the service reports a failure.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome, ClientError> {
        self.fetch(self.build_url(criteria)).await
    }

    fn build_url(&self, criteria: &SearchCriteria) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in criteria.query_pairs() {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    async fn fetch(&self, url: Url) -> Result<SearchOutcome, ClientError> {
        tracing::debug!(url = %url, "querying search endpoint");
        let response = self.client.get(url.clone()).send().await?;
        let body: SearchResponse = read_json(response, url.as_str()).await?;
        classify(body)
    }
}

/// Maps the response envelope onto an outcome.
///
/// `success` needs a `results` array to count as a hit; any other status,
/// including `success` without results, is an application error carrying the
/// server's message.
fn classify(body: SearchResponse) -> Result<SearchOutcome, ClientError> {
    match (body.status.as_str(), body.results) {
        (STATUS_SUCCESS, Some(results)) => {
            let stations = normalize_all(results);
            tracing::debug!(
                reported_total = body.total_results,
                shown = stations.len(),
                "search returned stations"
            );
            Ok(SearchOutcome::Found(stations))
        }
        (STATUS_OK, _) => {
            tracing::warn!("search service is up but has no station data loaded");
            Ok(SearchOutcome::EmptyDataset)
        }
        (status, _) => {
            let message = body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| NO_RESULTS_MESSAGE.to_owned());
            tracing::warn!(status, message, "search service reported an error");
            Err(ClientError::Application(message))
        }
    }
}

//! HTTP plumbing shared by the search and load clients.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Builds the `reqwest` client with the configured timeout and user agent.
pub(crate) fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ClientError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

pub(crate) fn parse_endpoint(url: &str) -> Result<Url, ClientError> {
    Url::parse(url).map_err(|e| ClientError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}

/// Asserts a 2xx status and decodes the body as `T`.
///
/// # Errors
///
/// Returns [`ClientError::Http`] on a non-2xx status or a body read failure,
/// and [`ClientError::Deserialize`] if the body is not the expected JSON.
pub(crate) async fn read_json<T>(response: Response, context: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

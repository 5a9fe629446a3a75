use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// How one transport exchange failed, before per-flow error mapping.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response: malformed URL, unreachable
    /// host, connect failure or timeout.
    #[error("unreachable: {0}")]
    Unreachable(String),
    /// The server answered with a non-success status.
    #[error("status: {0}")]
    Status(u16),
    /// The response body did not decode into the expected type.
    #[error("decode: {0}")]
    Decode(String),
}

/// A thin wrapper on an HTTP client for making auth requests. Sets
/// sensible defaults such as timeout and user-agent.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Initializes a transport with the default 5 second timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Performs one POST exchange: serializes `body` as a JSON object,
    /// sends it to `url` and decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// [`TransportError::Unreachable`] when no response arrives (bad URL,
    /// connect failure, timeout, aborted request),
    /// [`TransportError::Status`] for any non-success status and
    /// [`TransportError::Decode`] when the body does not parse into `T`.
    pub async fn post_json<T, B>(&self, url: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        debug!(url, "sending auth request");
        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(
                reqwest::header::USER_AGENT,
                format!("authkit-core/{}", env!("CARGO_PKG_VERSION")),
            )
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!(url, error = %err, "auth request did not complete");
                TransportError::Unreachable(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "auth request rejected");
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    }
}

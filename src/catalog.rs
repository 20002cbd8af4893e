//! Model catalog retrieval.
//!
//! The lab server advertises the models it can run at `GET /models`. The
//! response is a JSON array of descriptors; order is meaningful and is used
//! directly as the display and default-selection order.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// A selectable backend model advertised by the lab server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Model {
    /// Opaque identifier, unique within one catalog response.
    pub id: String,
    /// Human-readable label shown in the picker.
    pub display_name: String,
}

/// Why a catalog fetch failed.
///
/// Each failure is a distinct, reportable kind rather than a swallowed
/// exception; the UI renders the kind in its status line.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// The request never completed (refused connection, DNS, timeout).
    #[error("request failed: {0}")]
    Network(#[source] Box<ureq::Error>),
    /// The response body was not a JSON array of model descriptors.
    #[error("invalid catalog payload: {0}")]
    Decode(#[source] Box<ureq::Error>),
}

/// Blocking HTTP client for the lab server's catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    base_url: String,
    timeout: Duration,
}

impl Client {
    /// Create a client for the given base URL (trailing slash tolerated).
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the model catalog from `<base>/models`.
    ///
    /// The returned order is the server's order, untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing whether the request, the HTTP
    /// status, or the payload was at fault.
    pub fn fetch_models(&self) -> Result<Vec<Model>, CatalogError> {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(self.timeout))
            .build();
        let agent: Agent = config.new_agent();
        let url = format!("{}/models", self.base_url);
        let user_agent = concat!("voicelab/", env!("CARGO_PKG_VERSION"));

        let response = match agent.get(&url).header("User-Agent", user_agent).call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => return Err(CatalogError::Status(status)),
            Err(err) => return Err(CatalogError::Network(Box::new(err))),
        };

        response
            .into_body()
            .read_json()
            .map_err(|err| CatalogError::Decode(Box::new(err)))
    }
}

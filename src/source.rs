//! Policy document data source.
//!
//! The aggregator reads the policy definition through the [`PolicySource`]
//! trait so the HTTP fetch can be stubbed in tests. The production
//! implementation is [`HttpPolicySource`], a thin `reqwest` client around
//! the configured endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PolicyDocument;

/// The payload shape returned by the policy endpoint.
///
/// The document itself lives under the `policy` key.
#[derive(Debug, serde::Deserialize)]
struct PolicyEnvelope {
    policy: PolicyDocument,
}

/// A source of policy documents.
///
/// `Ok(None)` means the request itself succeeded but carried no usable
/// payload; the aggregator turns that into the 503 path. Transport and
/// decode failures are returned as errors and are not recovered locally.
#[async_trait]
pub trait PolicySource: Send + Sync {
    /// Fetches the policy document, or `None` when the source yields no data.
    async fn fetch_policy(&self) -> EngineResult<Option<PolicyDocument>>;
}

/// HTTP-backed policy source.
pub struct HttpPolicySource {
    client: reqwest::Client,
    url: String,
}

impl HttpPolicySource {
    /// Creates a source that GETs the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PolicySource for HttpPolicySource {
    async fn fetch_policy(&self) -> EngineResult<Option<PolicyDocument>> {
        debug!(url = %self.url, "Fetching policy document");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| EngineError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Transport {
                message: format!("policy endpoint returned status {status}"),
            });
        }

        let bytes = response.bytes().await.map_err(|e| EngineError::Transport {
            message: e.to_string(),
        })?;

        // An empty body is the "no data" signal, not a decode failure.
        if bytes.is_empty() {
            return Ok(None);
        }

        let envelope: PolicyEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| EngineError::MalformedDocument {
                message: e.to_string(),
            })?;

        Ok(Some(envelope.policy))
    }
}

//! HTTP transport used to reach the webhook.

use std::time::Duration;

/// Failure to get any HTTP response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends a JSON body with `POST` and reports the response status.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, TransportError> {
        let response = self
            .agent
            .post(url)
            .send_json(body)
            .map_err(|e| TransportError(format!("HTTP error: {e}")))?;
        Ok(response.status().as_u16())
    }
}

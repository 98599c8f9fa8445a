//! The HTTP verb layer under the client.
//!
//! `Transport` is the seam for tests: production code wires in
//! `UreqTransport`, tests substitute scripted implementations.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// What can go wrong talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure; no HTTP status ever arrived.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Server answered with a non-success status code.
    #[error("http status {0}")]
    Status(u16),
    /// A response arrived but its body was not the documented shape.
    #[error("unexpected response body: {0}")]
    Body(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Body(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Body(err.to_string())
    }
}

/// The three verbs the roster client needs.
pub trait Transport {
    /// GET a JSON document.
    fn get_json(&self, url: &str) -> Result<Value, ApiError>;

    /// POST a JSON body; returns the parsed response body.
    fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;

    /// DELETE a resource. The response body is ignored.
    fn delete(&self, url: &str) -> Result<(), ApiError>;
}

/// Production transport over a shared `ureq` agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

/// Overall per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

impl UreqTransport {
    /// Build the transport with its request timeout applied.
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = self.agent.get(url).call()?;
        Ok(response.into_json::<Value>()?)
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self.agent.post(url).send_json(body)?;
        Ok(response.into_json::<Value>()?)
    }

    fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.agent.delete(url).call()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).to_string(),
            "transport failure: connection refused"
        );
        assert_eq!(ApiError::Status(404).to_string(), "http status 404");
        assert_eq!(
            ApiError::Body("missing field `data`".to_string()).to_string(),
            "unexpected response body: missing field `data`"
        );
    }

    #[test]
    fn test_io_errors_map_to_body() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "cut off");
        assert!(matches!(ApiError::from(io), ApiError::Body(_)));
    }

    #[test]
    fn test_serde_errors_map_to_body() {
        let bad = serde_json::from_str::<Value>("{not json").unwrap_err();
        assert!(matches!(ApiError::from(bad), ApiError::Body(_)));
    }
}

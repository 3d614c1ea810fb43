//! HTTP transport abstraction.
//!
//! The client issues exactly one GET per directions request through a
//! [`Transport`]. Retry, backoff, caching, and concurrency limits are the
//! transport's business (or the caller's), never the client's.

use std::future::Future;

use serde_json::Value;

/// Errors from the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status.
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be read as JSON at all.
    #[error("unreadable body: {0}")]
    Body(String),

    /// Failure outside HTTP, e.g. injected by a test transport.
    #[error("{0}")]
    Other(String),
}

/// A one-shot GET transport for the directions endpoint.
pub trait Transport {
    /// Perform a GET against `url` with the given query parameters and
    /// return the parsed JSON body.
    ///
    /// A JSON `null` body is the API's explicit no-content value and comes
    /// back as [`Value::Null`]; a body that is not JSON at all is a
    /// transport failure.
    fn perform_get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn perform_get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, TransportError>> + Send {
        async move {
            let response = self.http.get(url).query(params).send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;

            // The endpoint answers an empty body for HEAD-like probes;
            // treat it the same as the explicit JSON null.
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }

            serde_json::from_str(&body).map_err(|e| {
                TransportError::Body(format!(
                    "{e} (body: {})",
                    body.chars().take(200).collect::<String>()
                ))
            })
        }
    }
}

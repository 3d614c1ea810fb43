//! Directions API client.
//!
//! Thin orchestration over the pure pieces: assemble the query, report
//! diagnostics, make exactly one GET through the transport, interpret the
//! outcome. Each call builds its own parameter list and owns its own
//! response; concurrent calls share nothing but the transport.

use crate::error::DirectionsError;
use crate::interpret::interpret;
use crate::place::Place;
use crate::query::build_query;
use crate::request::DirectionsRequest;
use crate::response::DirectionsResponse;
use crate::transport::{HttpTransport, Transport};

/// Default base URL for the Directions API (JSON output).
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Base URL for the API (defaults to the production JSON endpoint).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// Generic over the [`Transport`] so tests can inject a
/// [`MockTransport`](crate::mock::MockTransport); production use goes
/// through [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct DirectionsClient<T = HttpTransport> {
    config: DirectionsConfig,
    transport: T,
}

impl DirectionsClient<HttpTransport> {
    /// Create a client backed by a reqwest transport with the configured
    /// timeout.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let transport = HttpTransport::new(config.timeout_secs)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> DirectionsClient<T> {
    /// Create a client with an injected transport.
    pub fn with_transport(config: DirectionsConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Request directions for the given parameters.
    ///
    /// Issues exactly one GET. Conditions that do not block the request
    /// (currently: both arrival and departure time set) are logged at
    /// `warn` before sending.
    pub async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let (params, diagnostics) = build_query(request, &self.config);

        for diagnostic in &diagnostics {
            tracing::warn!(%diagnostic, "directions request diagnostic");
        }

        tracing::debug!(
            url = %self.config.base_url,
            mode = request.travel_mode.as_wire(),
            "sending directions request"
        );

        let outcome = self
            .transport
            .perform_get(&self.config.base_url, &params)
            .await;

        interpret(outcome)
    }

    /// Driving directions between two places, all optional parameters
    /// unset.
    pub async fn between(
        &self,
        origin: Place,
        destination: Place,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.directions(&DirectionsRequest::new(origin, destination))
            .await
    }
}

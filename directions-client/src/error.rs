//! Directions client error types.

use crate::response::DirectionsResponse;
use crate::status::ApiStatus;
use crate::transport::TransportError;

/// Errors from the directions client.
///
/// Every failure surfaces as one of these variants; nothing is swallowed
/// and nothing is retried internally. `Api` with `OVER_QUERY_LIMIT` or
/// `UNKNOWN_ERROR` is a retry candidate for the caller.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// The transport failed before a JSON body could be produced.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The body was valid JSON but not an object.
    #[error("malformed body: expected a JSON object, got {got}")]
    MalformedBody { got: &'static str },

    /// The JSON object did not map onto the response schema.
    #[error("response mapping error: {message}")]
    Mapping { message: String },

    /// The response carried no recognized status value.
    #[error("status code not found in response")]
    StatusMissing,

    /// The API answered with a recognized non-OK status.
    ///
    /// `message` combines the documented meaning of the status with the
    /// server's `error_message` when one was sent.
    #[error("API status {status}: {message}")]
    Api {
        status: ApiStatus,
        message: String,
        /// The mapped response, retained so callers can inspect partial
        /// data (geocoded waypoints, available travel modes, ...).
        response: Box<DirectionsResponse>,
    },
}

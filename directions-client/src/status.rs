//! Directions API status codes.

use std::fmt;

/// Status field returned at the top level of every Directions response.
///
/// An unrecognized wire value parses to `None` rather than defaulting to
/// [`ApiStatus::UnknownError`]; a missing status is its own error condition
/// ([`DirectionsError::StatusMissing`](crate::error::DirectionsError::StatusMissing)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
}

impl ApiStatus {
    /// Parse the wire string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(ApiStatus::Ok),
            "NOT_FOUND" => Some(ApiStatus::NotFound),
            "ZERO_RESULTS" => Some(ApiStatus::ZeroResults),
            "MAX_WAYPOINTS_EXCEEDED" => Some(ApiStatus::MaxWaypointsExceeded),
            "INVALID_REQUEST" => Some(ApiStatus::InvalidRequest),
            "OVER_QUERY_LIMIT" => Some(ApiStatus::OverQueryLimit),
            "REQUEST_DENIED" => Some(ApiStatus::RequestDenied),
            "UNKNOWN_ERROR" => Some(ApiStatus::UnknownError),
            _ => None,
        }
    }

    /// The exact string the API uses for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::NotFound => "NOT_FOUND",
            ApiStatus::ZeroResults => "ZERO_RESULTS",
            ApiStatus::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            ApiStatus::InvalidRequest => "INVALID_REQUEST",
            ApiStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ApiStatus::RequestDenied => "REQUEST_DENIED",
            ApiStatus::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Human-readable meaning of this status, per the API documentation.
    ///
    /// `OverQueryLimit` and `UnknownError` are retry candidates for the
    /// caller; nothing is retried here.
    pub fn description(self) -> &'static str {
        match self {
            ApiStatus::Ok => "The response contains a valid result.",
            ApiStatus::NotFound => {
                "At least one of the locations specified in the request's origin, \
                 destination, or waypoints could not be geocoded."
            }
            ApiStatus::ZeroResults => {
                "No route could be found between the origin and destination."
            }
            ApiStatus::MaxWaypointsExceeded => {
                "Too many waypoints were provided in the request. The maximum allowed \
                 number of waypoints is 23, plus the origin and destination. (If the \
                 request does not include an API key, the maximum allowed number of \
                 waypoints is 8.)"
            }
            ApiStatus::InvalidRequest => {
                "The provided request was invalid. Common causes of this status include \
                 an invalid parameter or parameter value."
            }
            ApiStatus::OverQueryLimit => {
                "The service has received too many requests from your application \
                 within the allowed time period."
            }
            ApiStatus::RequestDenied => {
                "The service denied use of the directions service by your application."
            }
            ApiStatus::UnknownError => {
                "A directions request could not be processed due to a server error. \
                 The request may succeed if you try again."
            }
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

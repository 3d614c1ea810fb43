//! Directions API response DTOs.
//!
//! These types map directly to the Directions JSON response. They use
//! `Option` liberally because the API omits fields rather than sending
//! null values in many cases. Route internals are carried as data; the
//! only field this crate interprets is the top-level `status`.

use serde::{Deserialize, Deserializer};

use crate::status::ApiStatus;

/// Top-level Directions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    /// Parsed status. `None` when the field is absent or carries an
    /// unrecognized value.
    #[serde(default, deserialize_with = "de_status")]
    pub status: Option<ApiStatus>,

    /// Server-supplied detail for non-OK statuses.
    pub error_message: Option<String>,

    /// Candidate routes, best first. Usually one unless alternatives
    /// were requested.
    #[serde(default)]
    pub routes: Vec<Route>,

    /// Geocoding detail for each of origin, waypoints, destination.
    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,

    /// Travel modes that would have produced results, sent with
    /// `ZERO_RESULTS` for the requested mode.
    #[serde(default)]
    pub available_travel_modes: Vec<String>,
}

/// How one request location was geocoded.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedWaypoint {
    pub geocoder_status: Option<String>,
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub partial_match: Option<bool>,
}

/// A single route from origin to destination.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Short textual description of the route (e.g. a road name).
    pub summary: Option<String>,

    /// One leg per origin/waypoint/destination pair.
    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Encoded polyline approximating the whole route.
    pub overview_polyline: Option<Polyline>,

    /// Viewport bounding box for the route.
    pub bounds: Option<Bounds>,

    #[serde(default)]
    pub warnings: Vec<String>,

    /// Order waypoints were visited in, when optimization reordered them.
    #[serde(default)]
    pub waypoint_order: Vec<u32>,

    pub copyrights: Option<String>,

    /// Total fare, for transit routes on agencies with fare data.
    pub fare: Option<Fare>,
}

/// One leg of a route, between two consecutive request locations.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub duration_in_traffic: Option<TextValue>,

    /// Estimated arrival time (transit legs only).
    pub arrival_time: Option<ZonedTime>,
    /// Estimated departure time (transit legs only).
    pub departure_time: Option<ZonedTime>,

    pub start_address: Option<String>,
    pub end_address: Option<String>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single routing instruction within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Instruction text; may contain HTML markup.
    pub html_instructions: Option<String>,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_location: Option<LatLng>,
    pub end_location: Option<LatLng>,
    pub polyline: Option<Polyline>,
    /// Travel mode wire token for this step (e.g. "WALKING" inside a
    /// transit route).
    pub travel_mode: Option<String>,
    pub maneuver: Option<String>,
}

/// A quantity with both a display string and a numeric value.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: Option<f64>,
}

/// A timestamp with its display form and time zone.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonedTime {
    pub text: Option<String>,
    pub time_zone: Option<String>,
    /// Unix epoch seconds.
    pub value: Option<i64>,
}

/// Geographic coordinate as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Encoded polyline.
#[derive(Debug, Clone, Deserialize)]
pub struct Polyline {
    pub points: String,
}

/// Bounding box for a route.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Transit fare.
#[derive(Debug, Clone, Deserialize)]
pub struct Fare {
    pub currency: Option<String>,
    pub value: Option<f64>,
    pub text: Option<String>,
}

/// Parse `status` leniently: an unrecognized token is `None`, never
/// defaulted to `UNKNOWN_ERROR`.
fn de_status<'de, D>(deserializer: D) -> Result<Option<ApiStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ApiStatus::from_wire))
}

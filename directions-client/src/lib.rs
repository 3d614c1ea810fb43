//! Google Maps Directions API client.
//!
//! Builds a typed query from travel parameters, issues a single GET
//! through a pluggable [`Transport`], and maps the JSON response into
//! typed results with a status-driven error taxonomy. No retry, caching,
//! or rate limiting lives here; those belong to the transport or the
//! caller.
//!
//! ```no_run
//! use directions_client::{
//!     DirectionsClient, DirectionsConfig, DirectionsRequest, Place, TravelMode,
//! };
//!
//! # async fn example() -> Result<(), directions_client::DirectionsError> {
//! let client = DirectionsClient::new(DirectionsConfig::new("YOUR_API_KEY"))?;
//!
//! let request = DirectionsRequest::new(
//!     Place::address("1600 Amphitheatre Pkwy"),
//!     Place::coordinate(37.4, -122.1),
//! )
//! .with_travel_mode(TravelMode::Walking);
//!
//! let response = client.directions(&request).await?;
//! for route in &response.routes {
//!     println!("{:?}", route.summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod interpret;
pub mod mock;
pub mod place;
pub mod query;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::DirectionsError;
pub use place::Place;
pub use query::{Diagnostic, build_query};
pub use request::{
    AvoidFeature, DirectionsRequest, TrafficModel, TransitMode, TransitRoutingPreference,
    TravelMode, UnitSystem,
};
pub use response::{DirectionsResponse, Leg, Route, Step};
pub use status::ApiStatus;
pub use transport::{HttpTransport, Transport, TransportError};

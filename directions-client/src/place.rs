//! Location references accepted by the Directions API.

use std::fmt;

/// A location usable as an origin, destination, or waypoint.
///
/// The Directions API accepts three forms of location reference. Each
/// serializes to a single query-string token via [`Display`](fmt::Display):
///
/// - an address is passed through verbatim,
/// - a coordinate becomes `"lat,lng"`,
/// - a place identifier gets the `place_id:` prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum Place {
    /// Free-text address (e.g. "1600 Amphitheatre Pkwy").
    Address(String),
    /// Geographic coordinate in decimal degrees.
    Coordinate { latitude: f64, longitude: f64 },
    /// Opaque place identifier (e.g. "ChIJ2eUgeAK6j4ARbn5u_wAGqWA").
    PlaceId(String),
}

impl Place {
    /// Place described by a free-text address.
    pub fn address(text: impl Into<String>) -> Self {
        Place::Address(text.into())
    }

    /// Place at a latitude/longitude coordinate.
    pub fn coordinate(latitude: f64, longitude: f64) -> Self {
        Place::Coordinate {
            latitude,
            longitude,
        }
    }

    /// Place referenced by its opaque identifier.
    pub fn place_id(id: impl Into<String>) -> Self {
        Place::PlaceId(id.into())
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Address(text) => f.write_str(text),
            Place::Coordinate {
                latitude,
                longitude,
            } => write!(f, "{latitude},{longitude}"),
            Place::PlaceId(id) => write!(f, "place_id:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_token_is_verbatim() {
        let place = Place::address("1600 Amphitheatre Pkwy");
        assert_eq!(place.to_string(), "1600 Amphitheatre Pkwy");
    }

    #[test]
    fn coordinate_token_is_lat_comma_lng() {
        let place = Place::coordinate(37.4, -122.1);
        assert_eq!(place.to_string(), "37.4,-122.1");
    }

    #[test]
    fn place_id_token_is_prefixed() {
        let place = Place::place_id("ChIJ2eUgeAK6j4ARbn5u_wAGqWA");
        assert_eq!(place.to_string(), "place_id:ChIJ2eUgeAK6j4ARbn5u_wAGqWA");
    }

    #[test]
    fn coordinate_preserves_precision() {
        let place = Place::coordinate(51.5007292, -0.1246254);
        assert_eq!(place.to_string(), "51.5007292,-0.1246254");
    }
}

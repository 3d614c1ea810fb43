//! Directions request parameters.
//!
//! [`DirectionsRequest`] collects the typed travel parameters for one
//! directions lookup. Optional parameters have an explicit unset state
//! (`None` or an empty list) and are only serialized when set; the wire
//! tokens live on the individual enums.

use chrono::{DateTime, Utc};

use crate::place::Place;

/// Mode of transport used for route calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// Lower-cased wire token for the `mode` parameter.
    pub fn as_wire(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

/// Route feature the calculated route should avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvoidFeature {
    Tolls,
    Highways,
    Ferries,
    Indoor,
}

impl AvoidFeature {
    pub fn as_wire(self) -> &'static str {
        match self {
            AvoidFeature::Tolls => "tolls",
            AvoidFeature::Highways => "highways",
            AvoidFeature::Ferries => "ferries",
            AvoidFeature::Indoor => "indoor",
        }
    }
}

/// Unit system used for distances in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_wire(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

/// Assumptions to use when calculating time in traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficModel {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl TrafficModel {
    pub fn as_wire(self) -> &'static str {
        match self {
            TrafficModel::BestGuess => "best_guess",
            TrafficModel::Pessimistic => "pessimistic",
            TrafficModel::Optimistic => "optimistic",
        }
    }
}

/// Preferred mode of transit, applicable when the travel mode is transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitMode {
    Bus,
    Subway,
    Train,
    Tram,
    /// Any rail-based transit; equivalent to `train|tram|subway`.
    Rail,
}

impl TransitMode {
    pub fn as_wire(self) -> &'static str {
        match self {
            TransitMode::Bus => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Train => "train",
            TransitMode::Tram => "tram",
            TransitMode::Rail => "rail",
        }
    }
}

/// Preference hint for transit route selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitRoutingPreference {
    LessWalking,
    FewerTransfers,
}

impl TransitRoutingPreference {
    pub fn as_wire(self) -> &'static str {
        match self {
            TransitRoutingPreference::LessWalking => "less_walking",
            TransitRoutingPreference::FewerTransfers => "fewer_transfers",
        }
    }
}

/// Parameters for a single directions lookup.
///
/// Only origin and destination are required; everything else defaults to
/// unset. Arrival and departure time are mutually exclusive and only honored
/// when the travel mode is transit — setting both does not block the request
/// but produces a [`Diagnostic`](crate::query::Diagnostic).
#[derive(Debug, Clone)]
pub struct DirectionsRequest {
    pub origin: Place,
    pub destination: Place,
    pub travel_mode: TravelMode,
    pub waypoints: Vec<Place>,
    pub alternatives: Option<bool>,
    pub avoid: Vec<AvoidFeature>,
    pub language: Option<String>,
    pub units: Option<UnitSystem>,
    pub region: Option<String>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub traffic_model: Option<TrafficModel>,
    pub transit_mode: Vec<TransitMode>,
    pub transit_routing_preference: Option<TransitRoutingPreference>,
}

impl DirectionsRequest {
    /// Create a request between two places with all optional parameters
    /// unset and the default driving mode.
    pub fn new(origin: Place, destination: Place) -> Self {
        Self {
            origin,
            destination,
            travel_mode: TravelMode::default(),
            waypoints: Vec::new(),
            alternatives: None,
            avoid: Vec::new(),
            language: None,
            units: None,
            region: None,
            arrival_time: None,
            departure_time: None,
            traffic_model: None,
            transit_mode: Vec::new(),
            transit_routing_preference: None,
        }
    }

    /// Set the travel mode.
    pub fn with_travel_mode(mut self, mode: TravelMode) -> Self {
        self.travel_mode = mode;
        self
    }

    /// Route through the given intermediate places, in order.
    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Place>) -> Self {
        self.waypoints = waypoints.into_iter().collect();
        self
    }

    /// Allow the service to return more than one route alternative.
    pub fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    /// Avoid the given route features.
    pub fn with_avoid(mut self, avoid: impl IntoIterator<Item = AvoidFeature>) -> Self {
        self.avoid = avoid.into_iter().collect();
        self
    }

    /// Language for result text.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Unit system for result distances.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    /// Region code bias, as a ccTLD two-character value.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Desired arrival time (transit mode only).
    pub fn with_arrival_time(mut self, at: DateTime<Utc>) -> Self {
        self.arrival_time = Some(at);
        self
    }

    /// Desired departure time (transit mode only).
    pub fn with_departure_time(mut self, at: DateTime<Utc>) -> Self {
        self.departure_time = Some(at);
        self
    }

    /// Traffic model for duration-in-traffic estimates.
    pub fn with_traffic_model(mut self, model: TrafficModel) -> Self {
        self.traffic_model = Some(model);
        self
    }

    /// Preferred transit modes.
    pub fn with_transit_mode(mut self, modes: impl IntoIterator<Item = TransitMode>) -> Self {
        self.transit_mode = modes.into_iter().collect();
        self
    }

    /// Transit route selection preference.
    pub fn with_transit_routing_preference(mut self, pref: TransitRoutingPreference) -> Self {
        self.transit_routing_preference = Some(pref);
        self
    }
}

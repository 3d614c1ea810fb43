//! Query parameter assembly.
//!
//! Pure construction: turns a [`DirectionsRequest`] plus client
//! configuration into the flat key/value list for the GET request. No I/O
//! and no logging happens here; conditions that do not block the request
//! come back as [`Diagnostic`]s for the caller to report.

use std::fmt;

use crate::client::DirectionsConfig;
use crate::place::Place;
use crate::request::{DirectionsRequest, TravelMode};

/// Non-fatal problem detected while assembling a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Both arrival and departure time were set. The API honors at most
    /// one; the request is still sent.
    ConflictingTimes,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ConflictingTimes => f.write_str(
                "arrival_time and departure_time are both set; \
                 the API honors at most one",
            ),
        }
    }
}

/// Assemble the query parameters for one directions request.
///
/// Always emits `key`, `origin`, `destination`, and `mode`; every other
/// parameter appears only when explicitly set. Arrival and departure time
/// serialize as Unix epoch seconds and only when the travel mode is
/// transit, though setting both is diagnosed regardless of mode.
pub fn build_query(
    request: &DirectionsRequest,
    config: &DirectionsConfig,
) -> (Vec<(&'static str, String)>, Vec<Diagnostic>) {
    let mut params = vec![
        ("key", config.api_key.clone()),
        ("origin", request.origin.to_string()),
        ("destination", request.destination.to_string()),
        ("mode", request.travel_mode.as_wire().to_string()),
    ];
    let mut diagnostics = Vec::new();

    if !request.waypoints.is_empty() {
        params.push(("waypoints", join_places(&request.waypoints)));
    }

    if let Some(alternatives) = request.alternatives {
        params.push(("alternatives", alternatives.to_string()));
    }

    if !request.avoid.is_empty() {
        let avoid = request
            .avoid
            .iter()
            .map(|f| f.as_wire())
            .collect::<Vec<_>>()
            .join("|");
        params.push(("avoid", avoid));
    }

    if let Some(language) = &request.language {
        params.push(("language", language.clone()));
    }

    if let Some(units) = request.units {
        params.push(("units", units.as_wire().to_string()));
    }

    if let Some(region) = &request.region {
        params.push(("region", region.clone()));
    }

    if request.arrival_time.is_some() && request.departure_time.is_some() {
        diagnostics.push(Diagnostic::ConflictingTimes);
    }

    if request.travel_mode == TravelMode::Transit {
        if let Some(arrival) = request.arrival_time {
            params.push(("arrival_time", arrival.timestamp().to_string()));
        }
        if let Some(departure) = request.departure_time {
            params.push(("departure_time", departure.timestamp().to_string()));
        }
    }

    if let Some(traffic_model) = request.traffic_model {
        params.push(("traffic_model", traffic_model.as_wire().to_string()));
    }

    if !request.transit_mode.is_empty() {
        let modes = request
            .transit_mode
            .iter()
            .map(|m| m.as_wire())
            .collect::<Vec<_>>()
            .join("|");
        params.push(("transit_mode", modes));
    }

    if let Some(pref) = request.transit_routing_preference {
        params.push(("transit_routing_preference", pref.as_wire().to_string()));
    }

    (params, diagnostics)
}

fn join_places(places: &[Place]) -> String {
    places
        .iter()
        .map(Place::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{
        AvoidFeature, TrafficModel, TransitMode, TransitRoutingPreference, UnitSystem,
    };
    use chrono::DateTime;

    fn config() -> DirectionsConfig {
        DirectionsConfig::new("test-key")
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn minimal_request_has_exactly_base_params() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"));

        let (params, diagnostics) = build_query(&request, &config());

        assert_eq!(
            params,
            vec![
                ("key", "test-key".to_string()),
                ("origin", "A".to_string()),
                ("destination", "B".to_string()),
                ("mode", "driving".to_string()),
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn required_keys_always_present() {
        let request = DirectionsRequest::new(
            Place::coordinate(37.4, -122.1),
            Place::place_id("ChIJdest"),
        )
        .with_travel_mode(TravelMode::Walking);

        let (params, _) = build_query(&request, &config());

        assert_eq!(param(&params, "origin"), Some("37.4,-122.1"));
        assert_eq!(param(&params, "destination"), Some("place_id:ChIJdest"));
        assert_eq!(param(&params, "mode"), Some("walking"));
        assert_eq!(param(&params, "key"), Some("test-key"));
    }

    #[test]
    fn empty_waypoints_omitted() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"));

        let (params, _) = build_query(&request, &config());

        assert!(param(&params, "waypoints").is_none());
    }

    #[test]
    fn waypoints_pipe_joined() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_waypoints([
                Place::address("C"),
                Place::coordinate(1.5, 2.5),
                Place::place_id("ChIJx"),
            ]);

        let (params, _) = build_query(&request, &config());

        let waypoints = param(&params, "waypoints").unwrap();
        assert_eq!(waypoints, "C|1.5,2.5|place_id:ChIJx");
        assert_eq!(waypoints.split('|').count(), 3);
    }

    #[test]
    fn single_waypoint_has_no_separator() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_waypoints([Place::address("C")]);

        let (params, _) = build_query(&request, &config());

        assert_eq!(param(&params, "waypoints"), Some("C"));
    }

    #[test]
    fn alternatives_only_when_set() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"));
        let (params, _) = build_query(&request, &config());
        assert!(param(&params, "alternatives").is_none());

        let request = request.with_alternatives(true);
        let (params, _) = build_query(&request, &config());
        assert_eq!(param(&params, "alternatives"), Some("true"));

        let request = request.with_alternatives(false);
        let (params, _) = build_query(&request, &config());
        assert_eq!(param(&params, "alternatives"), Some("false"));
    }

    #[test]
    fn avoid_pipe_joined() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_avoid([AvoidFeature::Tolls, AvoidFeature::Ferries]);

        let (params, _) = build_query(&request, &config());

        assert_eq!(param(&params, "avoid"), Some("tolls|ferries"));
    }

    #[test]
    fn passthrough_options_only_when_set() {
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"));
        let (params, _) = build_query(&request, &config());
        assert!(param(&params, "language").is_none());
        assert!(param(&params, "units").is_none());
        assert!(param(&params, "region").is_none());
        assert!(param(&params, "traffic_model").is_none());
        assert!(param(&params, "transit_mode").is_none());
        assert!(param(&params, "transit_routing_preference").is_none());

        let request = request
            .with_language("ja")
            .with_units(UnitSystem::Imperial)
            .with_region("jp")
            .with_traffic_model(TrafficModel::Optimistic)
            .with_transit_mode([TransitMode::Subway, TransitMode::Bus])
            .with_transit_routing_preference(TransitRoutingPreference::LessWalking);

        let (params, _) = build_query(&request, &config());
        assert_eq!(param(&params, "language"), Some("ja"));
        assert_eq!(param(&params, "units"), Some("imperial"));
        assert_eq!(param(&params, "region"), Some("jp"));
        assert_eq!(param(&params, "traffic_model"), Some("optimistic"));
        assert_eq!(param(&params, "transit_mode"), Some("subway|bus"));
        assert_eq!(
            param(&params, "transit_routing_preference"),
            Some("less_walking")
        );
    }

    #[test]
    fn transit_times_as_epoch_seconds() {
        let departure = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_travel_mode(TravelMode::Transit)
            .with_departure_time(departure);

        let (params, diagnostics) = build_query(&request, &config());

        assert_eq!(param(&params, "departure_time"), Some("1700000000"));
        assert!(param(&params, "arrival_time").is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn non_transit_mode_omits_times() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_arrival_time(at)
            .with_departure_time(at);

        let (params, diagnostics) = build_query(&request, &config());

        assert!(param(&params, "arrival_time").is_none());
        assert!(param(&params, "departure_time").is_none());
        // The conflict is diagnosed even though neither key is emitted.
        assert_eq!(diagnostics, vec![Diagnostic::ConflictingTimes]);
    }

    #[test]
    fn conflicting_times_diagnosed_for_transit_too() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_travel_mode(TravelMode::Transit)
            .with_arrival_time(at)
            .with_departure_time(at);

        let (params, diagnostics) = build_query(&request, &config());

        // Both keys go out; the service picks one. Matches documented
        // warn-and-proceed behavior.
        assert!(param(&params, "arrival_time").is_some());
        assert!(param(&params, "departure_time").is_some());
        assert_eq!(diagnostics, vec![Diagnostic::ConflictingTimes]);
    }

    #[test]
    fn single_time_no_diagnostic() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let request = DirectionsRequest::new(Place::address("A"), Place::address("B"))
            .with_travel_mode(TravelMode::Transit)
            .with_arrival_time(at);

        let (params, diagnostics) = build_query(&request, &config());

        assert_eq!(param(&params, "arrival_time"), Some("1700000000"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn diagnostic_display() {
        assert!(
            Diagnostic::ConflictingTimes
                .to_string()
                .contains("at most one")
        );
    }
}

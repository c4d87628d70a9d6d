//! Bus route and stop information response types.

use serde::Deserialize;

use crate::xml::{deserialize_empty_string_as_none, deserialize_null_as_default};

// --- Positions ---

/// Live position of one bus (`jBusPositions`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusPosition {
    /// Bus identifier.
    #[serde(rename = "VehicleID", deserialize_with = "deserialize_null_as_default")]
    pub vehicle_id: String,
    /// Latitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lat: f64,
    /// Longitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lon: f64,
    /// Deviation from schedule in minutes; positive means late.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub deviation: f64,
    /// Time of the last position update.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_time: String,
    /// Trip identifier.
    #[serde(rename = "TripID", deserialize_with = "deserialize_null_as_default")]
    pub trip_id: String,
    /// Route identifier.
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// Direction number (`0` or `1`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: u32,
    /// General direction (e.g. `NORTH`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_text: String,
    /// Destination shown on the bus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_headsign: String,
    /// Scheduled trip start.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_start_time: String,
    /// Scheduled trip end.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_end_time: String,
    /// Block number, if published.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub block_number: Option<String>,
}

// --- Routes ---

/// A bus route variant (`jRoutes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Route {
    /// Route identifier (e.g. `10A`).
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// Descriptive name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Line the route belongs to.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub line_description: String,
}

// --- Stops ---

/// A bus stop and the routes serving it (`jStops`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Stop {
    /// Stop identifier.
    #[serde(rename = "StopID", deserialize_with = "deserialize_null_as_default")]
    pub stop_id: String,
    /// Stop name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Longitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lon: f64,
    /// Latitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lat: f64,
    /// Route identifiers serving this stop.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub routes: Vec<String>,
}

// --- Route details ---

/// One point of a route shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShapePoint {
    /// Latitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lat: f64,
    /// Longitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lon: f64,
    /// Ordering, starting at 1.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub seq_num: u32,
}

/// Shape and stops for one direction of a route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Direction {
    /// Destination shown on the bus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_headsign: String,
    /// General direction (e.g. `NORTH`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_text: String,
    /// Direction number (`0` or `1`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: String,
    /// Ordered shape points.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub shape: Vec<ShapePoint>,
    /// Ordered stops.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stops: Vec<Stop>,
}

/// Shape and stops of a route (`jRouteDetails`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteDetails {
    /// Route identifier.
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// Descriptive name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// First direction; `None` for one-way routes.
    pub direction0: Option<Direction>,
    /// Second direction; `None` for one-way routes.
    pub direction1: Option<Direction>,
}

// --- Route schedule ---

/// Scheduled arrival at one stop of a trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTime {
    /// Stop identifier.
    #[serde(rename = "StopID", deserialize_with = "deserialize_null_as_default")]
    pub stop_id: String,
    /// Stop name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stop_name: String,
    /// Order of the stop within the trip.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stop_seq: u32,
    /// Scheduled time.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub time: String,
}

/// One scheduled trip of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TripSchedule {
    /// Route identifier.
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// Direction number (`0` or `1`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: String,
    /// General direction.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_direction_text: String,
    /// Destination shown on the bus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_headsign: String,
    /// Scheduled start.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub start_time: String,
    /// Scheduled end.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub end_time: String,
    /// Trip identifier.
    #[serde(rename = "TripID", deserialize_with = "deserialize_null_as_default")]
    pub trip_id: String,
    /// Stop arrivals in order.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stop_times: Vec<StopTime>,
}

/// Scheduled trips of a route (`jRouteSchedule`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteSchedule {
    /// Descriptive name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Trips in direction 0.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction0: Vec<TripSchedule>,
    /// Trips in direction 1.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction1: Vec<TripSchedule>,
}

// --- Stop schedule ---

/// One scheduled bus arrival at a stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScheduleArrival {
    /// Scheduled arrival time.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub schedule_time: String,
    /// Direction number (`0` or `1`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: String,
    /// Trip start.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub start_time: String,
    /// Trip end.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub end_time: String,
    /// Route identifier.
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// General direction.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_direction_text: String,
    /// Destination shown on the bus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub trip_headsign: String,
    /// Trip identifier.
    #[serde(rename = "TripID", deserialize_with = "deserialize_null_as_default")]
    pub trip_id: String,
}

/// Scheduled arrivals at a stop (`jStopSchedule`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopSchedule {
    /// The stop.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stop: Stop,
    /// Arrivals in time order.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub schedule_arrivals: Vec<ScheduleArrival>,
}

// --- JSON envelopes ---

/// `jBusPositions` body.
#[derive(Debug, Deserialize)]
pub(crate) struct PositionsResponse {
    #[serde(rename = "BusPositions", default, deserialize_with = "deserialize_null_as_default")]
    positions: Vec<BusPosition>,
}

impl From<PositionsResponse> for Vec<BusPosition> {
    fn from(r: PositionsResponse) -> Self {
        r.positions
    }
}

/// `jRoutes` body.
#[derive(Debug, Deserialize)]
pub(crate) struct RoutesResponse {
    #[serde(rename = "Routes", default, deserialize_with = "deserialize_null_as_default")]
    routes: Vec<Route>,
}

impl From<RoutesResponse> for Vec<Route> {
    fn from(r: RoutesResponse) -> Self {
        r.routes
    }
}

/// `jStops` body.
#[derive(Debug, Deserialize)]
pub(crate) struct StopsResponse {
    #[serde(rename = "Stops", default, deserialize_with = "deserialize_null_as_default")]
    stops: Vec<Stop>,
}

impl From<StopsResponse> for Vec<Stop> {
    fn from(r: StopsResponse) -> Self {
        r.stops
    }
}

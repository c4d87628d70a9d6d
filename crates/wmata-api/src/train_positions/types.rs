//! Train position response types.

use serde::Deserialize;

use crate::xml::{deserialize_empty_string_as_none, deserialize_null_as_default};

/// Live position of one train (`TrainPositions`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainPosition {
    /// Internal train identifier, stable for the trip.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub train_id: String,
    /// Non-unique train number shown to operators.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub train_number: String,
    /// Number of cars; `0` when unknown.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub car_count: u32,
    /// `1` or `2`; the same physical track can carry either.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: u32,
    /// Track circuit the train occupies.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub circuit_id: u32,
    /// Destination station code, if known.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub destination_station_code: Option<String>,
    /// Line code; `None` for non-revenue trains.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub line_code: Option<String>,
    /// Seconds the train has been at this circuit.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub seconds_at_location: u32,
    /// `NoPassengers`, `Normal`, `Special` or `Unknown`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub service_type: String,
}

/// One circuit along a standard route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteCircuit {
    /// Ordering along the route, starting at 0.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub seq_num: u32,
    /// Track circuit identifier.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub circuit_id: u32,
    /// Station code when the circuit is at a platform.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub station_code: Option<String>,
}

/// Ordered circuits of a line on one track (`StandardRoutes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StandardRoute {
    /// Line code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub line_code: String,
    /// Track number (`1` or `2`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub track_num: u32,
    /// Circuits in order.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub track_circuits: Vec<RouteCircuit>,
}

/// Neighboring circuits on one side of a circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrackNeighbor {
    /// `Left` or `Right`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub neighbor_type: String,
    /// Adjacent circuit identifiers.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub circuit_ids: Vec<u32>,
}

/// A track circuit and its neighbors (`TrackCircuits`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrackCircuit {
    /// Track number; `0` and `3` are pocket and yard tracks.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub track: u32,
    /// Track circuit identifier.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub circuit_id: u32,
    /// Neighbors on each side.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub neighbors: Vec<TrackNeighbor>,
}

// --- JSON envelopes ---

/// `TrainPositions` body.
#[derive(Debug, Deserialize)]
pub(crate) struct TrainPositionsResponse {
    #[serde(rename = "TrainPositions", default, deserialize_with = "deserialize_null_as_default")]
    positions: Vec<TrainPosition>,
}

impl From<TrainPositionsResponse> for Vec<TrainPosition> {
    fn from(r: TrainPositionsResponse) -> Self {
        r.positions
    }
}

/// `StandardRoutes` body.
#[derive(Debug, Deserialize)]
pub(crate) struct StandardRoutesResponse {
    #[serde(rename = "StandardRoutes", default, deserialize_with = "deserialize_null_as_default")]
    routes: Vec<StandardRoute>,
}

impl From<StandardRoutesResponse> for Vec<StandardRoute> {
    fn from(r: StandardRoutesResponse) -> Self {
        r.routes
    }
}

/// `TrackCircuits` body.
#[derive(Debug, Deserialize)]
pub(crate) struct TrackCircuitsResponse {
    #[serde(rename = "TrackCircuits", default, deserialize_with = "deserialize_null_as_default")]
    circuits: Vec<TrackCircuit>,
}

impl From<TrackCircuitsResponse> for Vec<TrackCircuit> {
    fn from(r: TrackCircuitsResponse) -> Self {
        r.circuits
    }
}

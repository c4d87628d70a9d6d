//! XML response wrapper types for train positions.

use serde::Deserialize;

use super::types::{RouteCircuit, StandardRoute, TrackCircuit, TrackNeighbor, TrainPosition};

/// `TrainPositions` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "TrainPositionsResp")]
pub struct TrainPositionsResp {
    #[serde(rename = "TrainPositions", default)]
    pub positions: PositionItems,
}

/// `TrainPositions` container.
#[derive(Debug, Default, Deserialize)]
pub struct PositionItems {
    #[serde(rename = "TrainPosition", default)]
    pub items: Vec<TrainPosition>,
}

impl From<TrainPositionsResp> for Vec<TrainPosition> {
    fn from(r: TrainPositionsResp) -> Self {
        r.positions.items
    }
}

/// `TrackCircuits` container of a standard route.
#[derive(Debug, Default, Deserialize)]
pub struct RouteCircuitItems {
    #[serde(rename = "TrackCircuit", default)]
    pub items: Vec<RouteCircuit>,
}

/// `StandardRoute` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlStandardRoute {
    pub line_code: String,
    pub track_num: u32,
    pub track_circuits: RouteCircuitItems,
}

impl From<XmlStandardRoute> for StandardRoute {
    fn from(r: XmlStandardRoute) -> Self {
        Self {
            line_code: r.line_code,
            track_num: r.track_num,
            track_circuits: r.track_circuits.items,
        }
    }
}

/// `StandardRoutes` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StandardRoutesResp")]
pub struct StandardRoutesResp {
    #[serde(rename = "StandardRoutes", default)]
    pub routes: StandardRouteItems,
}

/// `StandardRoutes` container.
#[derive(Debug, Default, Deserialize)]
pub struct StandardRouteItems {
    #[serde(rename = "StandardRoute", default)]
    pub items: Vec<XmlStandardRoute>,
}

impl From<StandardRoutesResp> for Vec<StandardRoute> {
    fn from(r: StandardRoutesResp) -> Self {
        r.routes
            .items
            .into_iter()
            .map(StandardRoute::from)
            .collect()
    }
}

/// Serialized integer array (`<CircuitIds><int>4</int></CircuitIds>`).
#[derive(Debug, Default, Deserialize)]
pub struct IntList {
    #[serde(rename = "int", default)]
    pub items: Vec<u32>,
}

/// `TrackNeighbor` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlTrackNeighbor {
    pub neighbor_type: String,
    pub circuit_ids: IntList,
}

/// `Neighbors` container.
#[derive(Debug, Default, Deserialize)]
pub struct NeighborItems {
    #[serde(rename = "TrackNeighbor", default)]
    pub items: Vec<XmlTrackNeighbor>,
}

/// `TrackCircuit` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlTrackCircuit {
    pub track: u32,
    pub circuit_id: u32,
    pub neighbors: NeighborItems,
}

impl From<XmlTrackCircuit> for TrackCircuit {
    fn from(c: XmlTrackCircuit) -> Self {
        Self {
            track: c.track,
            circuit_id: c.circuit_id,
            neighbors: c
                .neighbors
                .items
                .into_iter()
                .map(|n| TrackNeighbor {
                    neighbor_type: n.neighbor_type,
                    circuit_ids: n.circuit_ids.items,
                })
                .collect(),
        }
    }
}

/// `TrackCircuits` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "TrackCircuitsResp")]
pub struct TrackCircuitsResp {
    #[serde(rename = "TrackCircuits", default)]
    pub circuits: TrackCircuitItems,
}

/// `TrackCircuits` container.
#[derive(Debug, Default, Deserialize)]
pub struct TrackCircuitItems {
    #[serde(rename = "TrackCircuit", default)]
    pub items: Vec<XmlTrackCircuit>,
}

impl From<TrackCircuitsResp> for Vec<TrackCircuit> {
    fn from(r: TrackCircuitsResp) -> Self {
        r.circuits
            .items
            .into_iter()
            .map(TrackCircuit::from)
            .collect()
    }
}

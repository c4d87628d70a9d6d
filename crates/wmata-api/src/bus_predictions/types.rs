//! Real-time bus prediction response types.

use serde::Deserialize;

use crate::xml::deserialize_null_as_default;

/// Next-bus arrival at a stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusPrediction {
    /// Route identifier.
    #[serde(rename = "RouteID", deserialize_with = "deserialize_null_as_default")]
    pub route_id: String,
    /// Customer-facing direction (e.g. `North to Pentagon`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_text: String,
    /// Direction number (`0` or `1`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub direction_num: String,
    /// Minutes until arrival.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub minutes: i32,
    /// Bus identifier.
    #[serde(rename = "VehicleID", deserialize_with = "deserialize_null_as_default")]
    pub vehicle_id: String,
    /// Trip identifier.
    #[serde(rename = "TripID", deserialize_with = "deserialize_null_as_default")]
    pub trip_id: String,
}

/// Next-bus arrivals at one stop (`jPredictions`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NextBuses {
    /// Stop name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub stop_name: String,
    /// Arrivals, soonest first.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub predictions: Vec<BusPrediction>,
}

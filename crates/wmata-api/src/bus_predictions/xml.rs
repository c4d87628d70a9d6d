//! XML response wrapper types for bus predictions.

use serde::Deserialize;

use super::types::{BusPrediction, NextBuses};

/// `Predictions` full response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "NextBusResponse", rename_all = "PascalCase", default)]
pub struct NextBusResponse {
    pub stop_name: String,
    pub predictions: PredictionItems,
}

/// `Predictions` container.
#[derive(Debug, Default, Deserialize)]
pub struct PredictionItems {
    #[serde(rename = "NextBusPrediction", default)]
    pub items: Vec<BusPrediction>,
}

impl From<NextBusResponse> for NextBuses {
    fn from(r: NextBusResponse) -> Self {
        Self {
            stop_name: r.stop_name,
            predictions: r.predictions.items,
        }
    }
}

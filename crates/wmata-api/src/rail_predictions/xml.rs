//! XML response wrapper types for rail predictions.

use serde::Deserialize;

use super::types::TrainPrediction;

/// `GetPrediction` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "AIMPredictionResp")]
pub struct AimPredictionResp {
    #[serde(rename = "Trains", default)]
    pub trains: TrainItems,
}

/// `Trains` container.
#[derive(Debug, Default, Deserialize)]
pub struct TrainItems {
    #[serde(rename = "AIMPredictionTrainInfo", default)]
    pub items: Vec<TrainPrediction>,
}

impl From<AimPredictionResp> for Vec<TrainPrediction> {
    fn from(r: AimPredictionResp) -> Self {
        r.trains.items
    }
}

//! `RailPredictions` - Real-time Rail Predictions service.

use tracing::instrument;

use super::api::LocalRailPredictionsApi;
use super::types::{PredictionResponse, TrainPrediction};
use super::xml::AimPredictionResp;
use crate::client::WmataClient;
use crate::error::{Error, Result};
use crate::format::ResponseFormat;

/// Real-time Rail Predictions service (`StationPrediction.svc`).
#[derive(Debug, Clone)]
pub struct RailPredictions {
    client: WmataClient,
    format: ResponseFormat,
}

impl RailPredictions {
    /// Creates the service over `client`, requesting `format` bodies.
    #[must_use]
    pub const fn new(client: WmataClient, format: ResponseFormat) -> Self {
        Self { client, format }
    }

    /// Response format used by this service.
    #[must_use]
    pub const fn format(&self) -> ResponseFormat {
        self.format
    }
}

/// Comma-joins station codes for the `GetPrediction/{codes}` segment.
///
/// Codes are opaque; only empty ones are rejected.
fn join_station_codes(station_codes: &[&str]) -> Result<String> {
    if station_codes.is_empty() || station_codes.iter().any(|c| c.is_empty()) {
        return Err(Error::MissingArgument("StationCodes"));
    }
    Ok(station_codes.join(","))
}

impl LocalRailPredictionsApi for RailPredictions {
    #[instrument(skip_all)]
    async fn next_trains(&self, station_codes: &[&str]) -> Result<Vec<TrainPrediction>> {
        let codes = join_station_codes(station_codes)?;
        let prefix = self.format.path(
            "StationPrediction.svc/json/GetPrediction",
            "StationPrediction.svc/GetPrediction",
        );
        let url = self.client.endpoint_with_segment(prefix, &codes)?;
        self.client
            .fetch::<PredictionResponse, AimPredictionResp, _>(self.format, url, &[])
            .await
    }
}

//! `BusPredictions` - Real-time Bus Predictions service.

use tracing::instrument;

use super::api::LocalBusPredictionsApi;
use super::types::NextBuses;
use super::xml::NextBusResponse;
use crate::client::WmataClient;
use crate::error::{Result, require};
use crate::format::ResponseFormat;

/// Real-time Bus Predictions service (`NextBusService.svc`).
#[derive(Debug, Clone)]
pub struct BusPredictions {
    client: WmataClient,
    format: ResponseFormat,
}

impl BusPredictions {
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

impl LocalBusPredictionsApi for BusPredictions {
    #[instrument(skip_all)]
    async fn next_buses(&self, stop_id: &str) -> Result<NextBuses> {
        require(stop_id, "StopID")?;
        let url = self.client.endpoint(self.format.path(
            "NextBusService.svc/json/jPredictions",
            "NextBusService.svc/Predictions",
        ))?;
        let query = [("StopID", String::from(stop_id))];
        self.client
            .fetch::<NextBuses, NextBusResponse, _>(self.format, url, &query)
            .await
    }
}

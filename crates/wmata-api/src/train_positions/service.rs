//! `TrainPositions` - Train Positions service.

use serde::de::DeserializeOwned;
use tracing::instrument;

use super::api::LocalTrainPositionsApi;
use super::types::{
    StandardRoute, StandardRoutesResponse, TrackCircuit, TrackCircuitsResponse, TrainPosition,
    TrainPositionsResponse,
};
use super::xml::{StandardRoutesResp, TrackCircuitsResp, TrainPositionsResp};
use crate::client::WmataClient;
use crate::error::Result;
use crate::format::ResponseFormat;

/// Train Positions service.
#[derive(Debug, Clone)]
pub struct TrainPositions {
    client: WmataClient,
    format: ResponseFormat,
}

impl TrainPositions {
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

    /// Fetches `TrainPositions/{resource}` with `contentType` set.
    async fn fetch_resource<J, X, T>(&self, resource: &str) -> Result<T>
    where
        J: DeserializeOwned + Into<T>,
        X: DeserializeOwned + Into<T>,
    {
        let url = self
            .client
            .endpoint(&format!("TrainPositions/{resource}"))?;
        let query = [("contentType", String::from(self.format.content_type()))];
        self.client.fetch::<J, X, T>(self.format, url, &query).await
    }
}

impl LocalTrainPositionsApi for TrainPositions {
    #[instrument(skip_all)]
    async fn live_positions(&self) -> Result<Vec<TrainPosition>> {
        self.fetch_resource::<TrainPositionsResponse, TrainPositionsResp, _>("TrainPositions")
            .await
    }

    #[instrument(skip_all)]
    async fn standard_routes(&self) -> Result<Vec<StandardRoute>> {
        self.fetch_resource::<StandardRoutesResponse, StandardRoutesResp, _>("StandardRoutes")
            .await
    }

    #[instrument(skip_all)]
    async fn track_circuits(&self) -> Result<Vec<TrackCircuit>> {
        self.fetch_resource::<TrackCircuitsResponse, TrackCircuitsResp, _>("TrackCircuits")
            .await
    }
}

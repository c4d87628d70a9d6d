//! `BusRouteInfo` - Bus Route and Stop Information service.

use tracing::instrument;

use super::api::LocalBusRouteInfoApi;
use super::types::{
    BusPosition, PositionsResponse, Route, RouteDetails, RouteSchedule, RoutesResponse, Stop,
    StopSchedule, StopsResponse,
};
use super::xml::{
    BusPositionsResp, RouteDetailsInfo, RouteScheduleInfo, RoutesResp, StopScheduleInfo, StopsResp,
};
use crate::client::WmataClient;
use crate::error::{Result, require};
use crate::format::ResponseFormat;
use crate::params::{SearchArea, push_optional};

/// Bus Route and Stop Information service (`Bus.svc`).
#[derive(Debug, Clone)]
pub struct BusRouteInfo {
    client: WmataClient,
    format: ResponseFormat,
}

impl BusRouteInfo {
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

impl LocalBusRouteInfoApi for BusRouteInfo {
    #[instrument(skip_all)]
    async fn positions(
        &self,
        route_id: Option<&str>,
        area: Option<SearchArea>,
    ) -> Result<Vec<BusPosition>> {
        let url = self
            .client
            .endpoint(self.format.path("Bus.svc/json/jBusPositions", "Bus.svc/BusPositions"))?;
        let mut query = Vec::new();
        push_optional(&mut query, "RouteID", route_id);
        if let Some(area) = area {
            area.push_query(&mut query);
        }
        self.client
            .fetch::<PositionsResponse, BusPositionsResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn path_details(&self, route_id: &str, date: Option<&str>) -> Result<RouteDetails> {
        require(route_id, "RouteID")?;
        let url = self
            .client
            .endpoint(self.format.path("Bus.svc/json/jRouteDetails", "Bus.svc/RouteDetails"))?;
        let mut query = vec![("RouteID", String::from(route_id))];
        push_optional(&mut query, "Date", date);
        self.client
            .fetch::<RouteDetails, RouteDetailsInfo, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn routes(&self) -> Result<Vec<Route>> {
        let url = self
            .client
            .endpoint(self.format.path("Bus.svc/json/jRoutes", "Bus.svc/Routes"))?;
        self.client
            .fetch::<RoutesResponse, RoutesResp, _>(self.format, url, &[])
            .await
    }

    #[instrument(skip_all)]
    async fn route_schedule(
        &self,
        route_id: &str,
        date: Option<&str>,
        including_variations: bool,
    ) -> Result<RouteSchedule> {
        require(route_id, "RouteID")?;
        let url = self.client.endpoint(
            self.format
                .path("Bus.svc/json/jRouteSchedule", "Bus.svc/RouteSchedule"),
        )?;
        let mut query = vec![("RouteID", String::from(route_id))];
        push_optional(&mut query, "Date", date);
        query.push(("IncludingVariations", including_variations.to_string()));
        self.client
            .fetch::<RouteSchedule, RouteScheduleInfo, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn stop_schedule(&self, stop_id: &str, date: Option<&str>) -> Result<StopSchedule> {
        require(stop_id, "StopID")?;
        let url = self
            .client
            .endpoint(self.format.path("Bus.svc/json/jStopSchedule", "Bus.svc/StopSchedule"))?;
        let mut query = vec![("StopID", String::from(stop_id))];
        push_optional(&mut query, "Date", date);
        self.client
            .fetch::<StopSchedule, StopScheduleInfo, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn stops(&self, area: Option<SearchArea>) -> Result<Vec<Stop>> {
        let url = self
            .client
            .endpoint(self.format.path("Bus.svc/json/jStops", "Bus.svc/Stops"))?;
        let mut query = Vec::new();
        if let Some(area) = area {
            area.push_query(&mut query);
        }
        self.client
            .fetch::<StopsResponse, StopsResp, _>(self.format, url, &query)
            .await
    }
}

//! `RailStationInfo` - Rail Station Information service.

use tracing::instrument;

use super::api::LocalRailStationInfoApi;
use super::types::{
    EntrancesResponse, Line, LinesResponse, ParkingResponse, PathItem, PathResponse,
    Station, StationEntrance, StationParking, StationTime, StationTimesResponse,
    StationToStationInfo, StationToStationResponse, StationsResponse,
};
use super::xml::{
    LinesResp, PathResp, StationEntrancesResp, StationParkingResp, StationTimeResp,
    StationToStationInfoResp, StationsResp,
};
use crate::client::WmataClient;
use crate::error::{Result, require};
use crate::format::ResponseFormat;
use crate::params::{SearchArea, push_optional};

/// Rail Station Information service (`Rail.svc`).
#[derive(Debug, Clone)]
pub struct RailStationInfo {
    client: WmataClient,
    format: ResponseFormat,
}

impl RailStationInfo {
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

impl LocalRailStationInfoApi for RailStationInfo {
    #[instrument(skip_all)]
    async fn lines(&self) -> Result<Vec<Line>> {
        let url = self
            .client
            .endpoint(self.format.path("Rail.svc/json/jLines", "Rail.svc/Lines"))?;
        self.client
            .fetch::<LinesResponse, LinesResp, _>(self.format, url, &[])
            .await
    }

    #[instrument(skip_all)]
    async fn stations(&self, line_code: Option<&str>) -> Result<Vec<Station>> {
        let url = self
            .client
            .endpoint(self.format.path("Rail.svc/json/jStations", "Rail.svc/Stations"))?;
        let mut query = Vec::new();
        push_optional(&mut query, "LineCode", line_code);
        self.client
            .fetch::<StationsResponse, StationsResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn station_info(&self, station_code: &str) -> Result<Station> {
        require(station_code, "StationCode")?;
        let url = self.client.endpoint(
            self.format
                .path("Rail.svc/json/jStationInfo", "Rail.svc/StationInfo"),
        )?;
        let query = [("StationCode", String::from(station_code))];
        self.client.send(self.format, url, &query).await
    }

    #[instrument(skip_all)]
    async fn parking(&self, station_code: &str) -> Result<Vec<StationParking>> {
        require(station_code, "StationCode")?;
        let url = self.client.endpoint(
            self.format
                .path("Rail.svc/json/jStationParking", "Rail.svc/StationParking"),
        )?;
        let query = [("StationCode", String::from(station_code))];
        self.client
            .fetch::<ParkingResponse, StationParkingResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn path_between(&self, from_station: &str, to_station: &str) -> Result<Vec<PathItem>> {
        require(from_station, "FromStationCode")?;
        require(to_station, "ToStationCode")?;
        let url = self
            .client
            .endpoint(self.format.path("Rail.svc/json/jPath", "Rail.svc/Path"))?;
        let query = [
            ("FromStationCode", String::from(from_station)),
            ("ToStationCode", String::from(to_station)),
        ];
        self.client
            .fetch::<PathResponse, PathResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn station_timings(&self, station_code: &str) -> Result<Vec<StationTime>> {
        require(station_code, "StationCode")?;
        let url = self.client.endpoint(
            self.format
                .path("Rail.svc/json/jStationTimes", "Rail.svc/StationTimes"),
        )?;
        let query = [("StationCode", String::from(station_code))];
        self.client
            .fetch::<StationTimesResponse, StationTimeResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn station_to_station(
        &self,
        from_station: Option<&str>,
        to_station: Option<&str>,
    ) -> Result<Vec<StationToStationInfo>> {
        let url = self.client.endpoint(self.format.path(
            "Rail.svc/json/jSrcStationToDstStationInfo",
            "Rail.svc/SrcStationToDstStationInfo",
        ))?;
        let mut query = Vec::new();
        push_optional(&mut query, "FromStationCode", from_station);
        push_optional(&mut query, "ToStationCode", to_station);
        self.client
            .fetch::<StationToStationResponse, StationToStationInfoResp, _>(
                self.format,
                url,
                &query,
            )
            .await
    }

    #[instrument(skip_all)]
    async fn entrances(&self, area: Option<SearchArea>) -> Result<Vec<StationEntrance>> {
        let url = self.client.endpoint(
            self.format
                .path("Rail.svc/json/jStationEntrances", "Rail.svc/StationEntrances"),
        )?;
        let mut query = Vec::new();
        if let Some(area) = area {
            area.push_query(&mut query);
        }
        self.client
            .fetch::<EntrancesResponse, StationEntrancesResp, _>(self.format, url, &query)
            .await
    }
}

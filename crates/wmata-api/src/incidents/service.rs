//! `Incidents` - Incidents service.

use tracing::instrument;

use super::api::LocalIncidentsApi;
use super::types::{
    BusIncident, BusIncidentsResponse, ElevatorIncident, ElevatorIncidentsResponse, RailIncident,
    RailIncidentsResponse,
};
use super::xml::{BusIncidentsResp, ElevatorIncidentsResp, RailIncidentsResp};
use crate::client::WmataClient;
use crate::error::Result;
use crate::format::ResponseFormat;
use crate::params::push_optional;

/// Incidents service (`Incidents.svc`).
#[derive(Debug, Clone)]
pub struct Incidents {
    client: WmataClient,
    format: ResponseFormat,
}

impl Incidents {
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

impl LocalIncidentsApi for Incidents {
    #[instrument(skip_all)]
    async fn bus_incidents(&self, route: Option<&str>) -> Result<Vec<BusIncident>> {
        let url = self.client.endpoint(
            self.format
                .path("Incidents.svc/json/BusIncidents", "Incidents.svc/BusIncidents"),
        )?;
        let mut query = Vec::new();
        push_optional(&mut query, "Route", route);
        self.client
            .fetch::<BusIncidentsResponse, BusIncidentsResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn elevator_incidents(
        &self,
        station_code: Option<&str>,
    ) -> Result<Vec<ElevatorIncident>> {
        let url = self.client.endpoint(self.format.path(
            "Incidents.svc/json/ElevatorIncidents",
            "Incidents.svc/ElevatorIncidents",
        ))?;
        let mut query = Vec::new();
        push_optional(&mut query, "StationCode", station_code);
        self.client
            .fetch::<ElevatorIncidentsResponse, ElevatorIncidentsResp, _>(self.format, url, &query)
            .await
    }

    #[instrument(skip_all)]
    async fn rail_incidents(&self) -> Result<Vec<RailIncident>> {
        let url = self
            .client
            .endpoint(self.format.path("Incidents.svc/json/Incidents", "Incidents.svc/Incidents"))?;
        self.client
            .fetch::<RailIncidentsResponse, RailIncidentsResp, _>(self.format, url, &[])
            .await
    }
}

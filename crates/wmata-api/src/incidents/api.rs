//! `IncidentsApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::types::{BusIncident, ElevatorIncident, RailIncident};

/// Incidents API trait.
///
/// Abstracts API operations for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(IncidentsApi: Send)]
pub trait LocalIncidentsApi {
    /// Lists bus incidents, optionally for one route.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn bus_incidents(&self, route: Option<&str>) -> Result<Vec<BusIncident>>;

    /// Lists elevator and escalator outages, optionally for one station.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn elevator_incidents(&self, station_code: Option<&str>)
    -> Result<Vec<ElevatorIncident>>;

    /// Lists current rail incidents.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn rail_incidents(&self) -> Result<Vec<RailIncident>>;
}

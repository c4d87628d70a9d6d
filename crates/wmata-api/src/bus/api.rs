//! `BusRouteInfoApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::params::SearchArea;

use super::types::{BusPosition, Route, RouteDetails, RouteSchedule, Stop, StopSchedule};

/// Bus Route and Stop Information API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Dates are passed through as `YYYY-MM-DD`; omitting one means today.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(BusRouteInfoApi: Send)]
pub trait LocalBusRouteInfoApi {
    /// Lists live bus positions, optionally for one route and/or area.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn positions(
        &self,
        route_id: Option<&str>,
        area: Option<SearchArea>,
    ) -> Result<Vec<BusPosition>>;

    /// Fetches the shape and stops of a route.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `route_id` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn path_details(&self, route_id: &str, date: Option<&str>) -> Result<RouteDetails>;

    /// Lists all bus routes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn routes(&self) -> Result<Vec<Route>>;

    /// Fetches the scheduled trips of a route.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `route_id` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn route_schedule(
        &self,
        route_id: &str,
        date: Option<&str>,
        including_variations: bool,
    ) -> Result<RouteSchedule>;

    /// Fetches the scheduled arrivals at a stop.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `stop_id` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn stop_schedule(&self, stop_id: &str, date: Option<&str>) -> Result<StopSchedule>;

    /// Lists bus stops, optionally within `area`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn stops(&self, area: Option<SearchArea>) -> Result<Vec<Stop>>;
}

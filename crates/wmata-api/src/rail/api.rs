//! `RailStationInfoApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::params::SearchArea;

use super::types::{
    Line, PathItem, Station, StationEntrance, StationParking, StationTime, StationToStationInfo,
};

/// Rail Station Information API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(RailStationInfoApi: Send)]
pub trait LocalRailStationInfoApi {
    /// Lists all Metrorail lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn lines(&self) -> Result<Vec<Line>>;

    /// Lists stations, optionally only those on `line_code`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn stations(&self, line_code: Option<&str>) -> Result<Vec<Station>>;

    /// Fetches location and address information for one station.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `station_code` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn station_info(&self, station_code: &str) -> Result<Station>;

    /// Fetches parking information for one station.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `station_code` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn parking(&self, station_code: &str) -> Result<Vec<StationParking>>;

    /// Lists the stations between two stations on the same line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if either code is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn path_between(&self, from_station: &str, to_station: &str) -> Result<Vec<PathItem>>;

    /// Fetches opening and first/last train times for a station.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `station_code` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn station_timings(&self, station_code: &str) -> Result<Vec<StationTime>>;

    /// Fetches distance, fare and travel time between stations.
    ///
    /// Omitting a code returns every pair for the other side.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn station_to_station(
        &self,
        from_station: Option<&str>,
        to_station: Option<&str>,
    ) -> Result<Vec<StationToStationInfo>>;

    /// Lists station entrances, optionally within `area`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn entrances(&self, area: Option<SearchArea>) -> Result<Vec<StationEntrance>>;
}

//! `RailPredictionsApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::types::TrainPrediction;

/// Real-time Rail Predictions API trait.
///
/// Abstracts API operations for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(RailPredictionsApi: Send)]
pub trait LocalRailPredictionsApi {
    /// Fetches next-train arrivals for the given station codes.
    ///
    /// Pass `["All"]` for every station.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `station_codes` is empty
    /// or contains an empty code, otherwise an error if the HTTP request or
    /// decoding fails.
    async fn next_trains(&self, station_codes: &[&str]) -> Result<Vec<TrainPrediction>>;
}

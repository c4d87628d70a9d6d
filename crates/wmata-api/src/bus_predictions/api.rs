//! `BusPredictionsApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::types::NextBuses;

/// Real-time Bus Predictions API trait.
///
/// Abstracts API operations for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(BusPredictionsApi: Send)]
pub trait LocalBusPredictionsApi {
    /// Fetches next-bus arrivals at a stop.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingArgument`] if `stop_id` is empty,
    /// otherwise an error if the HTTP request or decoding fails.
    async fn next_buses(&self, stop_id: &str) -> Result<NextBuses>;
}

//! `TrainPositionsApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::types::{StandardRoute, TrackCircuit, TrainPosition};

/// Train Positions API trait.
///
/// Abstracts API operations for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TrainPositionsApi: Send)]
pub trait LocalTrainPositionsApi {
    /// Lists uniquely identified trains in service and their circuits.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn live_positions(&self) -> Result<Vec<TrainPosition>>;

    /// Lists the ordered track circuits of every line and track.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn standard_routes(&self) -> Result<Vec<StandardRoute>>;

    /// Lists every track circuit with its neighbors.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn track_circuits(&self) -> Result<Vec<TrackCircuit>>;
}

//! Train Positions service (`TrainPositions`).
//!
//! Unlike the other services, this API picks the body format from a
//! `contentType` query parameter instead of the path.

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTrainPositionsApi, TrainPositionsApi};
pub use service::TrainPositions;
pub use types::{RouteCircuit, StandardRoute, TrackCircuit, TrackNeighbor, TrainPosition};

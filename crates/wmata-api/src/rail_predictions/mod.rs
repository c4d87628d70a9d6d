//! Real-time Rail Predictions service (`StationPrediction.svc`).

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalRailPredictionsApi, RailPredictionsApi};
pub use service::RailPredictions;
pub use types::TrainPrediction;

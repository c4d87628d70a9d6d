//! Real-time Bus Predictions service (`NextBusService.svc`).

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{BusPredictionsApi, LocalBusPredictionsApi};
pub use service::BusPredictions;
pub use types::{BusPrediction, NextBuses};

//! Typed client library for the WMATA transit API.
//!
//! One [`WmataClient`] carries the API key and transport; each sub-API is a
//! small service built over a clone of it with a [`ResponseFormat`]:
//!
//! ```no_run
//! use wmata_api::rail::{LocalRailStationInfoApi, RailStationInfo};
//! use wmata_api::{ResponseFormat, WmataClient};
//!
//! # async fn run() -> wmata_api::Result<()> {
//! let client = WmataClient::builder().api_key("my-key").build()?;
//! let rail = RailStationInfo::new(client, ResponseFormat::Json);
//! for station in rail.stations(Some("RD")).await? {
//!     println!("{} {}", station.code, station.name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod format;
mod params;
mod xml;

/// Bus Route and Stop Information.
pub mod bus;

/// Real-time Bus Predictions.
pub mod bus_predictions;

/// Incidents.
pub mod incidents;

/// Rail Station Information.
pub mod rail;

/// Real-time Rail Predictions.
pub mod rail_predictions;

/// Train Positions.
pub mod train_positions;

#[allow(clippy::module_name_repetitions)]
pub use client::{WmataClient, WmataClientBuilder, decode};
pub use error::{Error, Result};
pub use format::ResponseFormat;
pub use params::SearchArea;

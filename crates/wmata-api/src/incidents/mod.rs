//! Incidents service (`Incidents.svc`).
//!
//! Bus delays, elevator/escalator outages and rail incidents.

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{IncidentsApi, LocalIncidentsApi};
pub use service::Incidents;
pub use types::{BusIncident, ElevatorIncident, RailIncident};

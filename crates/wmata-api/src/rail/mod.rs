//! Rail Station Information service (`Rail.svc`).
//!
//! Lines, stations, parking, paths between stations, first/last train
//! times, fares and entrances.

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalRailStationInfoApi, RailStationInfoApi};
pub use service::RailStationInfo;
pub use types::{
    Address, AllDayParking, DaySchedule, Line, PathItem, RailFare, ShortTermParking, Station,
    StationEntrance, StationParking, StationTime, StationToStationInfo, TrainTime,
};

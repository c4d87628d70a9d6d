//! Bus Route and Stop Information service (`Bus.svc`).
//!
//! Live positions, routes, route shapes, schedules and stops.

mod api;
mod service;
mod types;
mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{BusRouteInfoApi, LocalBusRouteInfoApi};
pub use service::BusRouteInfo;
pub use types::{
    BusPosition, Direction, Route, RouteDetails, RouteSchedule, ScheduleArrival, ShapePoint, Stop,
    StopSchedule, StopTime, TripSchedule,
};

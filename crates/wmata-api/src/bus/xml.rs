//! XML response wrapper types for bus route and stop information.
//!
//! Nested lists are wrapped in the XML bodies (`<Shape><ShapePoint>`,
//! `<Routes><string>`), so the records holding them get mirror types here
//! that convert into the public ones.

use serde::Deserialize;

use super::types::{
    BusPosition, Direction, Route, RouteDetails, RouteSchedule, ScheduleArrival, ShapePoint,
    Stop, StopSchedule, StopTime, TripSchedule,
};
use crate::xml::StringList;

/// `BusPositions` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "BusPositionsResp")]
pub struct BusPositionsResp {
    #[serde(rename = "BusPositions", default)]
    pub positions: PositionItems,
}

/// `BusPositions` container.
#[derive(Debug, Default, Deserialize)]
pub struct PositionItems {
    #[serde(rename = "BusPosition", default)]
    pub items: Vec<BusPosition>,
}

impl From<BusPositionsResp> for Vec<BusPosition> {
    fn from(r: BusPositionsResp) -> Self {
        r.positions.items
    }
}

/// `Routes` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "RoutesResp")]
pub struct RoutesResp {
    #[serde(rename = "Routes", default)]
    pub routes: RouteItems,
}

/// `Routes` container.
#[derive(Debug, Default, Deserialize)]
pub struct RouteItems {
    #[serde(rename = "Route", default)]
    pub items: Vec<Route>,
}

impl From<RoutesResp> for Vec<Route> {
    fn from(r: RoutesResp) -> Self {
        r.routes.items
    }
}

/// `Stop` element with its `<Routes><string>` list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlStop {
    #[serde(rename = "StopID")]
    pub stop_id: String,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub routes: StringList,
}

impl From<XmlStop> for Stop {
    fn from(s: XmlStop) -> Self {
        Self {
            stop_id: s.stop_id,
            name: s.name,
            lon: s.lon,
            lat: s.lat,
            routes: s.routes.into(),
        }
    }
}

/// `Stops` container.
#[derive(Debug, Default, Deserialize)]
pub struct StopItems {
    #[serde(rename = "Stop", default)]
    pub items: Vec<XmlStop>,
}

impl From<StopItems> for Vec<Stop> {
    fn from(s: StopItems) -> Self {
        s.items.into_iter().map(Stop::from).collect()
    }
}

/// `Stops` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StopsResp")]
pub struct StopsResp {
    #[serde(rename = "Stops", default)]
    pub stops: StopItems,
}

impl From<StopsResp> for Vec<Stop> {
    fn from(r: StopsResp) -> Self {
        r.stops.into()
    }
}

/// `Shape` container.
#[derive(Debug, Default, Deserialize)]
pub struct ShapeItems {
    #[serde(rename = "ShapePoint", default)]
    pub items: Vec<ShapePoint>,
}

/// `Direction0` / `Direction1` element of `RouteDetailsInfo`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlDirection {
    pub trip_headsign: String,
    pub direction_text: String,
    pub direction_num: String,
    pub shape: ShapeItems,
    pub stops: StopItems,
}

impl From<XmlDirection> for Direction {
    fn from(d: XmlDirection) -> Self {
        Self {
            trip_headsign: d.trip_headsign,
            direction_text: d.direction_text,
            direction_num: d.direction_num,
            shape: d.shape.items,
            stops: d.stops.into(),
        }
    }
}

/// `RouteDetails` full response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "RouteDetailsInfo", rename_all = "PascalCase", default)]
pub struct RouteDetailsInfo {
    #[serde(rename = "RouteID")]
    pub route_id: String,
    pub name: String,
    pub direction0: Option<XmlDirection>,
    pub direction1: Option<XmlDirection>,
}

impl From<RouteDetailsInfo> for RouteDetails {
    fn from(r: RouteDetailsInfo) -> Self {
        Self {
            route_id: r.route_id,
            name: r.name,
            direction0: r.direction0.map(Direction::from),
            direction1: r.direction1.map(Direction::from),
        }
    }
}

/// `StopTimes` container.
#[derive(Debug, Default, Deserialize)]
pub struct StopTimeItems {
    #[serde(rename = "StopInfo", default)]
    pub items: Vec<StopTime>,
}

/// `RouteScheduleTrip` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlTripSchedule {
    #[serde(rename = "RouteID")]
    pub route_id: String,
    pub direction_num: String,
    pub trip_direction_text: String,
    pub trip_headsign: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "TripID")]
    pub trip_id: String,
    pub stop_times: StopTimeItems,
}

impl From<XmlTripSchedule> for TripSchedule {
    fn from(t: XmlTripSchedule) -> Self {
        Self {
            route_id: t.route_id,
            direction_num: t.direction_num,
            trip_direction_text: t.trip_direction_text,
            trip_headsign: t.trip_headsign,
            start_time: t.start_time,
            end_time: t.end_time,
            trip_id: t.trip_id,
            stop_times: t.stop_times.items,
        }
    }
}

/// `Direction0` / `Direction1` container of `RouteScheduleInfo`.
#[derive(Debug, Default, Deserialize)]
pub struct TripItems {
    #[serde(rename = "RouteScheduleTrip", default)]
    pub items: Vec<XmlTripSchedule>,
}

impl From<TripItems> for Vec<TripSchedule> {
    fn from(t: TripItems) -> Self {
        t.items.into_iter().map(TripSchedule::from).collect()
    }
}

/// `RouteSchedule` full response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "RouteScheduleInfo", rename_all = "PascalCase", default)]
pub struct RouteScheduleInfo {
    pub name: String,
    pub direction0: TripItems,
    pub direction1: TripItems,
}

impl From<RouteScheduleInfo> for RouteSchedule {
    fn from(r: RouteScheduleInfo) -> Self {
        Self {
            name: r.name,
            direction0: r.direction0.into(),
            direction1: r.direction1.into(),
        }
    }
}

/// `ScheduleArrivals` container.
#[derive(Debug, Default, Deserialize)]
pub struct ArrivalItems {
    #[serde(rename = "Arrival", default)]
    pub items: Vec<ScheduleArrival>,
}

/// `StopSchedule` full response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "StopScheduleInfo", rename_all = "PascalCase", default)]
pub struct StopScheduleInfo {
    pub stop: XmlStop,
    pub schedule_arrivals: ArrivalItems,
}

impl From<StopScheduleInfo> for StopSchedule {
    fn from(s: StopScheduleInfo) -> Self {
        Self {
            stop: s.stop.into(),
            schedule_arrivals: s.schedule_arrivals.items,
        }
    }
}

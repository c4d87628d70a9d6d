//! XML response wrapper types for rail station information.

use serde::Deserialize;

use super::types::{
    DaySchedule, Line, PathItem, Station, StationEntrance, StationParking, StationTime,
    StationToStationInfo, TrainTime,
};

/// `Lines` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "LinesResp")]
pub struct LinesResp {
    #[serde(rename = "Lines", default)]
    pub lines: LineItems,
}

/// `Lines` container.
#[derive(Debug, Default, Deserialize)]
pub struct LineItems {
    #[serde(rename = "Line", default)]
    pub items: Vec<Line>,
}

impl From<LinesResp> for Vec<Line> {
    fn from(r: LinesResp) -> Self {
        r.lines.items
    }
}

/// `Stations` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StationsResp")]
pub struct StationsResp {
    #[serde(rename = "Stations", default)]
    pub stations: StationItems,
}

/// `Stations` container.
#[derive(Debug, Default, Deserialize)]
pub struct StationItems {
    #[serde(rename = "Station", default)]
    pub items: Vec<Station>,
}

impl From<StationsResp> for Vec<Station> {
    fn from(r: StationsResp) -> Self {
        r.stations.items
    }
}

/// `StationParking` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StationParkingResp")]
pub struct StationParkingResp {
    #[serde(rename = "StationsParking", default)]
    pub stations_parking: StationParkingItems,
}

/// `StationsParking` container.
#[derive(Debug, Default, Deserialize)]
pub struct StationParkingItems {
    #[serde(rename = "StationParking", default)]
    pub items: Vec<StationParking>,
}

impl From<StationParkingResp> for Vec<StationParking> {
    fn from(r: StationParkingResp) -> Self {
        r.stations_parking.items
    }
}

/// `Path` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "PathResp")]
pub struct PathResp {
    #[serde(rename = "Path", default)]
    pub path: PathItems,
}

/// `Path` container.
#[derive(Debug, Default, Deserialize)]
pub struct PathItems {
    #[serde(rename = "MetroPathItem", default)]
    pub items: Vec<PathItem>,
}

impl From<PathResp> for Vec<PathItem> {
    fn from(r: PathResp) -> Self {
        r.path.items
    }
}

/// `StationTimes` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StationTimeResp")]
pub struct StationTimeResp {
    #[serde(rename = "StationTimes", default)]
    pub station_times: StationTimeItems,
}

/// `StationTimes` container.
#[derive(Debug, Default, Deserialize)]
pub struct StationTimeItems {
    #[serde(rename = "StationTime", default)]
    pub items: Vec<XmlStationTime>,
}

/// `StationTime` element; train lists are wrapped in `<Train>` elements.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlStationTime {
    pub code: String,
    pub station_name: String,
    pub monday: XmlDaySchedule,
    pub tuesday: XmlDaySchedule,
    pub wednesday: XmlDaySchedule,
    pub thursday: XmlDaySchedule,
    pub friday: XmlDaySchedule,
    pub saturday: XmlDaySchedule,
    pub sunday: XmlDaySchedule,
}

/// Weekday element of `StationTime`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlDaySchedule {
    pub opening_time: String,
    pub first_trains: TrainItems,
    pub last_trains: TrainItems,
}

/// `FirstTrains` / `LastTrains` container.
#[derive(Debug, Default, Deserialize)]
pub struct TrainItems {
    #[serde(rename = "Train", default)]
    pub items: Vec<TrainTime>,
}

impl From<XmlDaySchedule> for DaySchedule {
    fn from(d: XmlDaySchedule) -> Self {
        Self {
            opening_time: d.opening_time,
            first_trains: d.first_trains.items,
            last_trains: d.last_trains.items,
        }
    }
}

impl From<XmlStationTime> for StationTime {
    fn from(t: XmlStationTime) -> Self {
        Self {
            code: t.code,
            station_name: t.station_name,
            monday: t.monday.into(),
            tuesday: t.tuesday.into(),
            wednesday: t.wednesday.into(),
            thursday: t.thursday.into(),
            friday: t.friday.into(),
            saturday: t.saturday.into(),
            sunday: t.sunday.into(),
        }
    }
}

impl From<StationTimeResp> for Vec<StationTime> {
    fn from(r: StationTimeResp) -> Self {
        r.station_times
            .items
            .into_iter()
            .map(StationTime::from)
            .collect()
    }
}

/// `SrcStationToDstStationInfo` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StationToStationInfoResp")]
pub struct StationToStationInfoResp {
    #[serde(rename = "StationToStationInfos", default)]
    pub infos: StationToStationItems,
}

/// `StationToStationInfos` container.
#[derive(Debug, Default, Deserialize)]
pub struct StationToStationItems {
    #[serde(rename = "StationToStationInfo", default)]
    pub items: Vec<StationToStationInfo>,
}

impl From<StationToStationInfoResp> for Vec<StationToStationInfo> {
    fn from(r: StationToStationInfoResp) -> Self {
        r.infos.items
    }
}

/// `StationEntrances` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "StationEntrancesResp")]
pub struct StationEntrancesResp {
    #[serde(rename = "Entrances", default)]
    pub entrances: EntranceItems,
}

/// `Entrances` container.
#[derive(Debug, Default, Deserialize)]
pub struct EntranceItems {
    #[serde(rename = "StationEntrance", default)]
    pub items: Vec<StationEntrance>,
}

impl From<StationEntrancesResp> for Vec<StationEntrance> {
    fn from(r: StationEntrancesResp) -> Self {
        r.entrances.items
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_lines_resp() {
        // Arrange
        let xml = include_str!("../../../../fixtures/rail/lines.xml");

        // Act
        let response: LinesResp = quick_xml::de::from_str(xml).unwrap();

        // Assert
        let lines = Vec::from(response);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_code, "BL");
        // Empty elements should be deserialized as None
        assert_eq!(lines[0].internal_destination1, None);
        assert_eq!(lines[1].internal_destination2.as_deref(), Some("B08"));
    }

    #[test]
    fn test_parse_station_time_resp_unwraps_trains() {
        // Arrange
        let xml = include_str!("../../../../fixtures/rail/station_times_a01.xml");

        // Act
        let response: StationTimeResp = quick_xml::de::from_str(xml).unwrap();

        // Assert
        let times = Vec::from(response);
        assert_eq!(times.len(), 1);
        assert_eq!(times[0].monday.first_trains.len(), 2);
        assert_eq!(times[0].sunday.opening_time, "08:00");
        assert_eq!(times[0].saturday.last_trains[0].time, "00:48");
    }

    #[test]
    fn test_parse_empty_stations_resp() {
        // Arrange
        let xml = r#"<StationsResp xmlns="http://www.wmata.com"><Stations/></StationsResp>"#;

        // Act
        let response: StationsResp = quick_xml::de::from_str(xml).unwrap();

        // Assert
        assert!(Vec::from(response).is_empty());
    }
}

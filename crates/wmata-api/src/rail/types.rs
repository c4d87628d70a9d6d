//! Rail station information response types.

use serde::Deserialize;

use crate::xml::{deserialize_empty_string_as_none, deserialize_null_as_default};

// --- Lines ---

/// A Metrorail line (`jLines`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Line {
    /// Two-letter line code (e.g. `RD`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub line_code: String,
    /// Full line name (e.g. `Red`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub display_name: String,
    /// Station code of the first terminus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub start_station_code: String,
    /// Station code of the second terminus.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub end_station_code: String,
    /// Intermediate terminal station code, if any.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub internal_destination1: Option<String>,
    /// Second intermediate terminal station code, if any.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub internal_destination2: Option<String>,
}

// --- Stations ---

/// Street address of a station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    /// Street address.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub street: String,
    /// City.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub city: String,
    /// Two-letter state code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub state: String,
    /// ZIP code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub zip: String,
}

/// A station location and its lines (`jStations`, `jStationInfo`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Station {
    /// Station code (e.g. `A01`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub code: String,
    /// Station name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Code of a second platform level at the same complex.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub station_together1: Option<String>,
    /// Reserved for a third platform level.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub station_together2: Option<String>,
    /// First line served.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub line_code1: Option<String>,
    /// Second line served.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub line_code2: Option<String>,
    /// Third line served.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub line_code3: Option<String>,
    /// Fourth line served.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub line_code4: Option<String>,
    /// Latitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lat: f64,
    /// Longitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lon: f64,
    /// Street address.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub address: Address,
}

impl Station {
    /// Line codes served by this platform, in API order.
    pub fn line_codes(&self) -> impl Iterator<Item = &str> {
        [
            &self.line_code1,
            &self.line_code2,
            &self.line_code3,
            &self.line_code4,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
    }
}

// --- Parking ---

/// All-day parking details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AllDayParking {
    /// Number of all-day spaces.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub total_count: u32,
    /// Weekday cost for Metro riders (USD).
    pub rider_cost: Option<f64>,
    /// Weekday cost for non-riders (USD).
    pub non_rider_cost: Option<f64>,
    /// Saturday cost for Metro riders (USD).
    pub saturday_rider_cost: Option<f64>,
    /// Saturday cost for non-riders (USD).
    pub saturday_non_rider_cost: Option<f64>,
}

/// Short-term (metered) parking details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShortTermParking {
    /// Number of short-term spaces.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub total_count: u32,
    /// Free-form notes.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub notes: Option<String>,
}

/// Parking information for one station (`jStationParking`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StationParking {
    /// Station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub code: String,
    /// Free-form notes.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub notes: Option<String>,
    /// All-day parking.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub all_day_parking: AllDayParking,
    /// Short-term parking.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub short_term_parking: ShortTermParking,
}

// --- Path ---

/// One station on the path between two stations (`jPath`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PathItem {
    /// Line code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub line_code: String,
    /// Station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_code: String,
    /// Station name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_name: String,
    /// Ordering, starting at 1.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub seq_num: u32,
    /// Distance in feet to the previous station.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub distance_to_prev: u32,
}

// --- Station timings ---

/// A first or last train time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainTime {
    /// Departure time (`HH:MM`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub time: String,
    /// Destination station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub destination_station: String,
}

/// Opening time and first/last trains for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DaySchedule {
    /// Station opening time (`HH:MM`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub opening_time: String,
    /// First trains per destination.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub first_trains: Vec<TrainTime>,
    /// Last trains per destination.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub last_trains: Vec<TrainTime>,
}

/// Opening and first/last train times for a station (`jStationTimes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StationTime {
    /// Station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub code: String,
    /// Station name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_name: String,
    /// Monday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub monday: DaySchedule,
    /// Tuesday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub tuesday: DaySchedule,
    /// Wednesday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub wednesday: DaySchedule,
    /// Thursday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub thursday: DaySchedule,
    /// Friday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub friday: DaySchedule,
    /// Saturday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub saturday: DaySchedule,
    /// Sunday.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub sunday: DaySchedule,
}

// --- Station to station ---

/// Fares between two stations (USD).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RailFare {
    /// Peak fare.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub peak_time: f64,
    /// Off-peak fare.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub off_peak_time: f64,
    /// Reduced senior/disabled fare.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub senior_disabled: f64,
}

/// Distance, fare and travel time between two stations
/// (`jSrcStationToDstStationInfo`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StationToStationInfo {
    /// Origin station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub source_station: String,
    /// Destination station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub destination_station: String,
    /// Distance in miles.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub composite_miles: f64,
    /// Estimated travel time in minutes.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub rail_time: u32,
    /// Fares.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub rail_fare: RailFare,
}

// --- Entrances ---

/// A station entrance (`jStationEntrances`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StationEntrance {
    /// Entrance ID.
    #[serde(rename = "ID", deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Entrance name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Primary station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_code1: String,
    /// Second station code at a multi-level complex.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub station_code2: Option<String>,
    /// Description.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// Latitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lat: f64,
    /// Longitude.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lon: f64,
}

// --- JSON envelopes ---

/// `jLines` body.
#[derive(Debug, Deserialize)]
pub(crate) struct LinesResponse {
    #[serde(rename = "Lines", default, deserialize_with = "deserialize_null_as_default")]
    lines: Vec<Line>,
}

impl From<LinesResponse> for Vec<Line> {
    fn from(r: LinesResponse) -> Self {
        r.lines
    }
}

/// `jStations` body.
#[derive(Debug, Deserialize)]
pub(crate) struct StationsResponse {
    #[serde(rename = "Stations", default, deserialize_with = "deserialize_null_as_default")]
    stations: Vec<Station>,
}

impl From<StationsResponse> for Vec<Station> {
    fn from(r: StationsResponse) -> Self {
        r.stations
    }
}

/// `jStationParking` body.
#[derive(Debug, Deserialize)]
pub(crate) struct ParkingResponse {
    #[serde(rename = "StationsParking", default, deserialize_with = "deserialize_null_as_default")]
    stations_parking: Vec<StationParking>,
}

impl From<ParkingResponse> for Vec<StationParking> {
    fn from(r: ParkingResponse) -> Self {
        r.stations_parking
    }
}

/// `jPath` body.
#[derive(Debug, Deserialize)]
pub(crate) struct PathResponse {
    #[serde(rename = "Path", default, deserialize_with = "deserialize_null_as_default")]
    path: Vec<PathItem>,
}

impl From<PathResponse> for Vec<PathItem> {
    fn from(r: PathResponse) -> Self {
        r.path
    }
}

/// `jStationTimes` body.
#[derive(Debug, Deserialize)]
pub(crate) struct StationTimesResponse {
    #[serde(rename = "StationTimes", default, deserialize_with = "deserialize_null_as_default")]
    station_times: Vec<StationTime>,
}

impl From<StationTimesResponse> for Vec<StationTime> {
    fn from(r: StationTimesResponse) -> Self {
        r.station_times
    }
}

/// `jSrcStationToDstStationInfo` body.
#[derive(Debug, Deserialize)]
pub(crate) struct StationToStationResponse {
    #[serde(
        rename = "StationToStationInfos",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    infos: Vec<StationToStationInfo>,
}

impl From<StationToStationResponse> for Vec<StationToStationInfo> {
    fn from(r: StationToStationResponse) -> Self {
        r.infos
    }
}

/// `jStationEntrances` body.
#[derive(Debug, Deserialize)]
pub(crate) struct EntrancesResponse {
    #[serde(rename = "Entrances", default, deserialize_with = "deserialize_null_as_default")]
    entrances: Vec<StationEntrance>,
}

impl From<EntrancesResponse> for Vec<StationEntrance> {
    fn from(r: EntrancesResponse) -> Self {
        r.entrances
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::client::decode;
    use crate::format::ResponseFormat;

    #[test]
    fn test_null_fields_decode_as_defaults() {
        // Arrange
        let body = r#"{"Entrances":[{"ID":"1","Name":"EAST ENTRANCE","StationCode1":"A01","StationCode2":null,"Description":null,"Lat":null,"Lon":-77.0}]}"#;

        // Act
        let entrances: Vec<StationEntrance> =
            decode::<EntrancesResponse>(ResponseFormat::Json, body)
                .unwrap()
                .into();

        // Assert
        assert_eq!(
            entrances,
            vec![StationEntrance {
                id: String::from("1"),
                name: String::from("EAST ENTRANCE"),
                station_code1: String::from("A01"),
                station_code2: None,
                description: String::new(),
                lat: 0.0,
                lon: -77.0,
            }]
        );
    }

    #[test]
    fn test_null_envelope_and_nested_record_decode_as_empty() {
        // Arrange & Act
        let lines: Vec<Line> = decode::<LinesResponse>(ResponseFormat::Json, r#"{"Lines":null}"#)
            .unwrap()
            .into();
        let station: Station = decode(
            ResponseFormat::Json,
            r#"{"Code":"A01","Name":null,"Address":null,"Lat":38.898,"Lon":null}"#,
        )
        .unwrap();

        // Assert
        assert!(lines.is_empty());
        assert_eq!(station.code, "A01");
        assert_eq!(station.name, "");
        assert_eq!(station.address, Address::default());
    }

    #[test]
    fn test_line_codes_skips_missing() {
        // Arrange
        let station = Station {
            code: String::from("C01"),
            line_code1: Some(String::from("BL")),
            line_code2: Some(String::from("OR")),
            line_code3: Some(String::from("SV")),
            ..Station::default()
        };

        // Act
        let codes: Vec<&str> = station.line_codes().collect();

        // Assert
        assert_eq!(codes, vec!["BL", "OR", "SV"]);
    }
}

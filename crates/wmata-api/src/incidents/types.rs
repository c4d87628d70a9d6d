//! Incident response types.

use serde::Deserialize;

use crate::xml::{deserialize_empty_string_as_none, deserialize_null_as_default};

/// A bus delay or detour (`BusIncidents`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusIncident {
    /// Incident identifier.
    #[serde(rename = "IncidentID", deserialize_with = "deserialize_null_as_default")]
    pub incident_id: String,
    /// `Alert` or `Delay`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub incident_type: String,
    /// Affected route identifiers.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub routes_affected: Vec<String>,
    /// Free-text description.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// Last update time.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_updated: String,
}

/// An elevator or escalator outage (`ElevatorIncidents`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ElevatorIncident {
    /// Unit name (e.g. `A03N04`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub unit_name: String,
    /// `ELEVATOR` or `ESCALATOR`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub unit_type: String,
    /// Station code.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_code: String,
    /// Station name, sometimes with the entrance.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub station_name: String,
    /// Where the unit is within the station.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location_description: String,
    /// Reason for the outage.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub symptom_description: String,
    /// When the unit went out of service.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_out_of_serv: String,
    /// Last update time.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_updated: String,
    /// Estimated return, if known.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub estimated_return_to_service: Option<String>,
}

/// A rail delay or alert (`Incidents`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RailIncident {
    /// Incident identifier.
    #[serde(rename = "IncidentID", deserialize_with = "deserialize_null_as_default")]
    pub incident_id: String,
    /// Free-text description.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    /// `Alert` or `Delay`.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub incident_type: String,
    /// Semicolon-separated line codes (e.g. `RD; GR;`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub lines_affected: String,
    /// Last update time.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_updated: String,
}

impl RailIncident {
    /// Line codes in `lines_affected`, without separators or blanks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines_affected
            .split(';')
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

// --- JSON envelopes ---

/// `BusIncidents` body.
#[derive(Debug, Deserialize)]
pub(crate) struct BusIncidentsResponse {
    #[serde(rename = "BusIncidents", default, deserialize_with = "deserialize_null_as_default")]
    incidents: Vec<BusIncident>,
}

impl From<BusIncidentsResponse> for Vec<BusIncident> {
    fn from(r: BusIncidentsResponse) -> Self {
        r.incidents
    }
}

/// `ElevatorIncidents` body.
#[derive(Debug, Deserialize)]
pub(crate) struct ElevatorIncidentsResponse {
    #[serde(
        rename = "ElevatorIncidents",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    incidents: Vec<ElevatorIncident>,
}

impl From<ElevatorIncidentsResponse> for Vec<ElevatorIncident> {
    fn from(r: ElevatorIncidentsResponse) -> Self {
        r.incidents
    }
}

/// `Incidents` body.
#[derive(Debug, Deserialize)]
pub(crate) struct RailIncidentsResponse {
    #[serde(rename = "Incidents", default, deserialize_with = "deserialize_null_as_default")]
    incidents: Vec<RailIncident>,
}

impl From<RailIncidentsResponse> for Vec<RailIncident> {
    fn from(r: RailIncidentsResponse) -> Self {
        r.incidents
    }
}

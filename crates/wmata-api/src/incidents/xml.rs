//! XML response wrapper types for incidents.

use serde::Deserialize;

use super::types::{BusIncident, ElevatorIncident, RailIncident};
use crate::xml::StringList;

/// `BusIncident` element with its `<RoutesAffected><string>` list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct XmlBusIncident {
    #[serde(rename = "IncidentID")]
    pub incident_id: String,
    pub incident_type: String,
    pub routes_affected: StringList,
    pub description: String,
    pub date_updated: String,
}

impl From<XmlBusIncident> for BusIncident {
    fn from(i: XmlBusIncident) -> Self {
        Self {
            incident_id: i.incident_id,
            incident_type: i.incident_type,
            routes_affected: i.routes_affected.into(),
            description: i.description,
            date_updated: i.date_updated,
        }
    }
}

/// `BusIncidents` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "BusIncidentsResp")]
pub struct BusIncidentsResp {
    #[serde(rename = "BusIncidents", default)]
    pub incidents: BusIncidentItems,
}

/// `BusIncidents` container.
#[derive(Debug, Default, Deserialize)]
pub struct BusIncidentItems {
    #[serde(rename = "BusIncident", default)]
    pub items: Vec<XmlBusIncident>,
}

impl From<BusIncidentsResp> for Vec<BusIncident> {
    fn from(r: BusIncidentsResp) -> Self {
        r.incidents
            .items
            .into_iter()
            .map(BusIncident::from)
            .collect()
    }
}

/// `ElevatorIncidents` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "ElevatorIncidentsResp")]
pub struct ElevatorIncidentsResp {
    #[serde(rename = "ElevatorIncidents", default)]
    pub incidents: ElevatorIncidentItems,
}

/// `ElevatorIncidents` container.
#[derive(Debug, Default, Deserialize)]
pub struct ElevatorIncidentItems {
    #[serde(rename = "ElevatorIncident", default)]
    pub items: Vec<ElevatorIncident>,
}

impl From<ElevatorIncidentsResp> for Vec<ElevatorIncident> {
    fn from(r: ElevatorIncidentsResp) -> Self {
        r.incidents.items
    }
}

/// `Incidents` full response.
#[derive(Debug, Deserialize)]
#[serde(rename = "RailIncidentsResp")]
pub struct RailIncidentsResp {
    #[serde(rename = "Incidents", default)]
    pub incidents: RailIncidentItems,
}

/// `Incidents` container.
#[derive(Debug, Default, Deserialize)]
pub struct RailIncidentItems {
    #[serde(rename = "Incident", default)]
    pub items: Vec<RailIncident>,
}

impl From<RailIncidentsResp> for Vec<RailIncident> {
    fn from(r: RailIncidentsResp) -> Self {
        r.incidents.items
    }
}

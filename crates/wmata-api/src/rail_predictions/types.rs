//! Real-time rail prediction response types.

use serde::Deserialize;

use crate::xml::{deserialize_empty_string_as_none, deserialize_null_as_default};

/// Next-train arrival for one platform (`GetPrediction`).
///
/// `min` is `"ARR"`, `"BRD"`, `"---"` or a minute count, so it stays a
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainPrediction {
    /// Number of cars; `None` when unknown.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub car: Option<String>,
    /// Abbreviated destination name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub destination: String,
    /// Destination station code; `None` for non-revenue trains.
    #[serde(deserialize_with = "deserialize_empty_string_as_none")]
    pub destination_code: Option<String>,
    /// Full destination name.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub destination_name: String,
    /// Track group (`1` or `2`).
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub group: String,
    /// Line code, or `--` for non-revenue trains.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub line: String,
    /// Station code of the prediction.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location_code: String,
    /// Station name of the prediction.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub location_name: String,
    /// Minutes until arrival.
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub min: String,
}

impl TrainPrediction {
    /// Minutes until arrival when `min` is numeric.
    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        self.min.parse().ok()
    }
}

/// `GetPrediction` JSON body.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictionResponse {
    #[serde(rename = "Trains", default, deserialize_with = "deserialize_null_as_default")]
    trains: Vec<TrainPrediction>,
}

impl From<PredictionResponse> for Vec<TrainPrediction> {
    fn from(r: PredictionResponse) -> Self {
        r.trains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_only_for_numeric_values() {
        // Arrange
        let arriving = TrainPrediction {
            min: String::from("ARR"),
            ..TrainPrediction::default()
        };
        let later = TrainPrediction {
            min: String::from("12"),
            ..TrainPrediction::default()
        };

        // Act & Assert
        assert_eq!(arriving.minutes(), None);
        assert_eq!(later.minutes(), Some(12));
    }
}

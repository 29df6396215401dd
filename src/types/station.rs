//! Defines the data structures representing discovered weather stations and
//! their per-series availability metadata, mirroring the provider's
//! discovery JSON.

use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::time_window::TimeWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather-observation station and its metadata.
///
/// Stations are created at discovery time and are not mutated afterwards;
/// the catalog owns them for the lifetime of a discovery session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The provider's unique station identifier (e.g. `"00044"`).
    pub id: String,
    /// Human-readable station name (e.g. `"Grossenkneten"`).
    pub name: String,
    /// The administrative region (Bundesland) operating the station.
    pub state: String,
    /// Geographic position of the station.
    pub location: GeoPoint,
    /// `true` when the station no longer reports current-period data.
    pub historical: bool,
    /// One record per (data type, resolution) series the station offers.
    pub capabilities: Vec<CapabilityRecord>,
}

impl Station {
    /// `true` when at least one capability record matches `data_type`,
    /// regardless of resolution.
    pub fn has_capability(&self, data_type: DataCapability) -> bool {
        self.capabilities.iter().any(|c| c.data_type == data_type)
    }
}

/// A GeoJSON-style point, `coordinates` in `[longitude, latitude]` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Always `"Point"` in provider data.
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]` in decimal degrees.
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Availability of one data series: a data type at one resolution, with the
/// inclusive time span for which the series has data.
///
/// Invariant: `available_from <= available_until`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    pub data_type: DataCapability,
    pub resolution: TimeResolution,
    pub available_from: DateTime<Utc>,
    pub available_until: DateTime<Utc>,
}

impl CapabilityRecord {
    /// The availability span as a fully-bounded [`TimeWindow`].
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            from: Some(self.available_from),
            until: Some(self.available_until),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The discovery payload shape from the provider, verbatim.
    const STATION_JSON: &str = r#"{
        "id": "00044",
        "name": "Grossenkneten",
        "state": "Niedersachsen",
        "location": { "type": "Point", "coordinates": [8.237, 52.9336] },
        "historical": false,
        "capabilities": [
            {
                "dataType": "air_temperature",
                "resolution": "10_minutes",
                "availableFrom": "2020-01-01T00:00:00Z",
                "availableUntil": "2023-12-31T00:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn parses_discovery_json() {
        let station: Station = serde_json::from_str(STATION_JSON).unwrap();
        assert_eq!(station.id, "00044");
        assert_eq!(station.state, "Niedersachsen");
        assert!(!station.historical);
        assert_eq!(station.location.longitude(), 8.237);
        assert_eq!(station.location.latitude(), 52.9336);

        let record = &station.capabilities[0];
        assert_eq!(record.data_type, DataCapability::AirTemperature);
        assert_eq!(record.resolution, TimeResolution::TenMinutes);
        assert!(record.available_from <= record.available_until);
        assert_eq!(record.window().unix_bounds().unwrap().0, 1577836800);
    }

    #[test]
    fn has_capability_ignores_resolution() {
        let station: Station = serde_json::from_str(STATION_JSON).unwrap();
        assert!(station.has_capability(DataCapability::AirTemperature));
        assert!(!station.has_capability(DataCapability::Solar));
    }
}

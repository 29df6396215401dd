//! Defines the fixed set of data capabilities (measured phenomena) a station
//! can report, matching the tags used by the DWD open-data portal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of measured phenomenon a station can report.
///
/// The wire tag (e.g. `"air_temperature"`) is the value used in the provider's
/// discovery JSON and in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCapability {
    /// Air temperature 2 m above ground.
    AirTemperature,
    /// Daily temperature extremes (min/max).
    ExtremeTemperature,
    /// Precipitation totals.
    Precipitation,
    /// Sunshine duration and radiation.
    Solar,
    /// Wind speed and direction.
    Wind,
    /// Soil temperature at various depths.
    SoilTemperature,
    /// Air pressure at station height.
    Pressure,
    /// Cloud cover observations.
    Cloudiness,
    /// Air and soil moisture.
    Moisture,
}

impl DataCapability {
    /// All capabilities, in wire-tag-independent declaration order.
    ///
    /// Useful for shells that render one toggle per capability.
    pub const ALL: [DataCapability; 9] = [
        DataCapability::AirTemperature,
        DataCapability::ExtremeTemperature,
        DataCapability::Precipitation,
        DataCapability::Solar,
        DataCapability::Wind,
        DataCapability::SoilTemperature,
        DataCapability::Pressure,
        DataCapability::Cloudiness,
        DataCapability::Moisture,
    ];

    /// The provider's tag for this capability, used as a request path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataCapability::AirTemperature => "air_temperature",
            DataCapability::ExtremeTemperature => "extreme_temperature",
            DataCapability::Precipitation => "precipitation",
            DataCapability::Solar => "solar",
            DataCapability::Wind => "wind",
            DataCapability::SoilTemperature => "soil_temperature",
            DataCapability::Pressure => "pressure",
            DataCapability::Cloudiness => "cloudiness",
            DataCapability::Moisture => "moisture",
        }
    }
}

impl fmt::Display for DataCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataCapability {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataCapability::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Error returned when parsing a tag that is not part of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);

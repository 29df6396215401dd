//! Defines the fixed set of sampling resolutions offered by the provider,
//! from sub-minute through multi-annual series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::capability::UnknownTag;

/// The sampling interval of a reported data series.
///
/// The wire tag (e.g. `"10_minutes"`) is the value used in the provider's
/// discovery JSON and in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeResolution {
    #[serde(rename = "1_minute")]
    OneMinute,
    #[serde(rename = "5_minutes")]
    FiveMinutes,
    #[serde(rename = "10_minutes")]
    TenMinutes,
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "subdaily")]
    Subdaily,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "annual")]
    Annual,
    #[serde(rename = "multi_annual")]
    MultiAnnual,
}

impl TimeResolution {
    /// All resolutions, finest first.
    pub const ALL: [TimeResolution; 9] = [
        TimeResolution::OneMinute,
        TimeResolution::FiveMinutes,
        TimeResolution::TenMinutes,
        TimeResolution::Hourly,
        TimeResolution::Subdaily,
        TimeResolution::Daily,
        TimeResolution::Monthly,
        TimeResolution::Annual,
        TimeResolution::MultiAnnual,
    ];

    /// The provider's tag for this resolution, used as a request path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeResolution::OneMinute => "1_minute",
            TimeResolution::FiveMinutes => "5_minutes",
            TimeResolution::TenMinutes => "10_minutes",
            TimeResolution::Hourly => "hourly",
            TimeResolution::Subdaily => "subdaily",
            TimeResolution::Daily => "daily",
            TimeResolution::Monthly => "monthly",
            TimeResolution::Annual => "annual",
            TimeResolution::MultiAnnual => "multi_annual",
        }
    }
}

impl fmt::Display for TimeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeResolution {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeResolution::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

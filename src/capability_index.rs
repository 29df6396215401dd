//! Per-station capability lookups: which resolutions a data type is offered
//! at, and the availability window of one (data type, resolution) series.
//!
//! Both lookups are pure functions over a borrowed station, so nothing can
//! leak across a station change; callers re-run them against whichever
//! station is currently selected.

use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::station::Station;
use crate::types::time_window::TimeWindow;

/// The resolutions at which `station` offers `data_type`, sorted
/// lexicographically by wire tag and deduplicated. Empty when the station
/// does not offer the data type at all.
pub fn resolutions_for(station: &Station, data_type: DataCapability) -> Vec<TimeResolution> {
    let mut resolutions: Vec<TimeResolution> = station
        .capabilities
        .iter()
        .filter(|record| record.data_type == data_type)
        .map(|record| record.resolution)
        .collect();
    resolutions.sort_by_key(|r| r.as_str());
    resolutions.dedup();
    resolutions
}

/// The availability window of the series matching both `data_type` and
/// `resolution` exactly, or `None` when no record matches.
///
/// Duplicate records are not expected in provider data; if present, the
/// first match wins.
pub fn availability_window(
    station: &Station,
    data_type: DataCapability,
    resolution: TimeResolution,
) -> Option<TimeWindow> {
    station
        .capabilities
        .iter()
        .find(|record| record.data_type == data_type && record.resolution == resolution)
        .map(|record| record.window())
}

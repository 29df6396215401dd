//! The session-scoped "current selection": one station, one data type, one
//! resolution, one time window. Replaced as a whole when the station
//! changes, so stale downstream choices cannot survive a station switch.

use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::station::Station;
use crate::types::time_window::TimeWindow;

/// The caller's current download selection.
///
/// Selecting a station replaces the entire record, clearing data type,
/// resolution, and window in the same assignment. Selecting a data type
/// clears resolution and window; selecting a resolution clears the window.
/// Every mutation advances the epoch, which the download orchestrator uses
/// to discard responses belonging to a superseded selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    station: Option<Station>,
    data_type: Option<DataCapability>,
    resolution: Option<TimeResolution>,
    window: Option<TimeWindow>,
    epoch: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected station, dropping all downstream choices.
    pub fn select_station(&mut self, station: Station) {
        *self = Selection {
            station: Some(station),
            data_type: None,
            resolution: None,
            window: None,
            epoch: self.epoch + 1,
        };
    }

    /// Replaces the selected data type, dropping resolution and window.
    pub fn select_data_type(&mut self, data_type: DataCapability) {
        self.data_type = Some(data_type);
        self.resolution = None;
        self.window = None;
        self.epoch += 1;
    }

    /// Replaces the selected resolution, dropping the window.
    pub fn select_resolution(&mut self, resolution: TimeResolution) {
        self.resolution = Some(resolution);
        self.window = None;
        self.epoch += 1;
    }

    /// Replaces the requested time window.
    pub fn select_window(&mut self, window: TimeWindow) {
        self.window = Some(window);
        self.epoch += 1;
    }

    /// Drops the whole selection.
    pub fn clear(&mut self) {
        *self = Selection {
            epoch: self.epoch + 1,
            ..Selection::default()
        };
    }

    pub fn station(&self) -> Option<&Station> {
        self.station.as_ref()
    }

    pub fn data_type(&self) -> Option<DataCapability> {
        self.data_type
    }

    pub fn resolution(&self) -> Option<TimeResolution> {
        self.resolution
    }

    pub fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    /// Monotonic counter identifying this exact selection state.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

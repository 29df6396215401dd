//! Holds the full set of discovered stations and derives the visible subset
//! for a given filter state.

use crate::types::filter::FilterState;
use crate::types::station::Station;

/// The full station set of one discovery session.
///
/// Filtering never mutates the held set; [`StationCatalog::visible_stations`]
/// only borrows from it.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held station set with a freshly discovered one.
    pub fn set_stations(&mut self, stations: Vec<Station>) {
        self.stations = stations;
    }

    /// All held stations, unfiltered.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Looks up a station by its provider identifier.
    pub fn find(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// The subset of stations passing `filter`.
    ///
    /// A station is visible when it survives the historical flag (see
    /// [`FilterState::include_historical`]) and offers *every* enabled
    /// capability; a station missing any one of them is filtered out.
    pub fn visible_stations(&self, filter: &FilterState) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|station| filter.include_historical || !station.historical)
            .filter(|station| {
                filter
                    .enabled_capabilities()
                    .all(|capability| station.has_capability(capability))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::capability::DataCapability;
    use crate::types::resolution::TimeResolution;
    use crate::types::station::{CapabilityRecord, GeoPoint};
    use chrono::{TimeZone, Utc};

    fn record(data_type: DataCapability) -> CapabilityRecord {
        CapabilityRecord {
            data_type,
            resolution: TimeResolution::Daily,
            available_from: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            available_until: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn station(id: &str, historical: bool, capabilities: &[DataCapability]) -> Station {
        Station {
            id: id.to_string(),
            name: format!("Station {id}"),
            state: "Bayern".to_string(),
            location: GeoPoint::new(11.58, 48.14),
            historical,
            capabilities: capabilities.iter().copied().map(record).collect(),
        }
    }

    fn catalog() -> StationCatalog {
        let mut catalog = StationCatalog::new();
        catalog.set_stations(vec![
            station("both", false, &[DataCapability::AirTemperature, DataCapability::Solar]),
            station("temp-only", false, &[DataCapability::AirTemperature]),
            station("none", false, &[]),
            station("old", true, &[DataCapability::AirTemperature, DataCapability::Solar]),
        ]);
        catalog
    }

    fn ids(stations: &[&Station]) -> Vec<String> {
        stations.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn no_filters_shows_everything() {
        let catalog = catalog();
        let visible = catalog.visible_stations(&FilterState::default());
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn enabled_capabilities_combine_with_and() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_capability(DataCapability::AirTemperature, true);
        assert_eq!(ids(&catalog.visible_stations(&filter)), ["both", "temp-only", "old"]);

        // A station must satisfy every enabled filter, not any.
        filter.set_capability(DataCapability::Solar, true);
        assert_eq!(ids(&catalog.visible_stations(&filter)), ["both", "old"]);

        filter.set_capability(DataCapability::Precipitation, true);
        assert!(catalog.visible_stations(&filter).is_empty());
    }

    #[test]
    fn historical_flag_filters_only_historical_stations() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.include_historical = false;
        assert_eq!(ids(&catalog.visible_stations(&filter)), ["both", "temp-only", "none"]);
    }

    #[test]
    fn filtering_does_not_mutate_the_catalog() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_capability(DataCapability::Solar, true);
        filter.include_historical = false;
        let _ = catalog.visible_stations(&filter);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn set_stations_replaces_the_held_set() {
        let mut catalog = catalog();
        catalog.set_stations(vec![station("fresh", false, &[])]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("both").is_none());
        assert!(catalog.find("fresh").is_some());
    }
}

//! Construction of the provider-specific request descriptor for one data
//! series, with an optional time bound.

use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::time_window::TimeWindow;
use thiserror::Error;

/// Why a query descriptor could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The station identifier was empty.
    #[error("station id must not be empty")]
    MissingStationId,
}

/// The fully-resolved parameters of one requestable data series.
///
/// Created per request and immutable afterwards; [`QueryDescriptor::path`]
/// renders the provider path. A descriptor without a window signals "full
/// range" to the provider; this relaxed mode is only for callers that never
/// supplied a window, not a fallback for a rejected one.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    station_id: String,
    data_type: DataCapability,
    resolution: TimeResolution,
    window: Option<TimeWindow>,
}

impl QueryDescriptor {
    /// Builds a descriptor for `station_id`'s `data_type` series at
    /// `resolution`, optionally bounded by `window`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingStationId`] when `station_id` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dwd_opendata::{DataCapability, QueryDescriptor, TimeResolution, TimeWindow};
    /// use chrono::NaiveDate;
    ///
    /// let window = TimeWindow::bounded(
    ///     NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 12, 22).unwrap(),
    /// );
    /// let query = QueryDescriptor::build(
    ///     "00044",
    ///     DataCapability::AirTemperature,
    ///     TimeResolution::TenMinutes,
    ///     Some(window),
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     query.path(),
    ///     "/00044/air_temperature/10_minutes?from=1703030400&until=1703203200"
    /// );
    /// ```
    pub fn build(
        station_id: impl Into<String>,
        data_type: DataCapability,
        resolution: TimeResolution,
        window: Option<TimeWindow>,
    ) -> Result<Self, QueryError> {
        let station_id = station_id.into();
        if station_id.is_empty() {
            return Err(QueryError::MissingStationId);
        }
        Ok(Self {
            station_id,
            data_type,
            resolution,
            window,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn data_type(&self) -> DataCapability {
        self.data_type
    }

    pub fn resolution(&self) -> TimeResolution {
        self.resolution
    }

    pub fn window(&self) -> Option<&TimeWindow> {
        self.window.as_ref()
    }

    /// The request path: `/{stationId}/{dataType}/{resolution}`, plus
    /// `?from={unixSeconds}&until={unixSeconds}` when both window bounds are
    /// present. A window with any absent bound yields no query string at
    /// all; the provider never receives only one of the two parameters.
    pub fn path(&self) -> String {
        let mut path = format!("/{}/{}/{}", self.station_id, self.data_type, self.resolution);
        if let Some((from, until)) = self.window.as_ref().and_then(TimeWindow::unix_bounds) {
            path.push_str(&format!("?from={from}&until={until}"));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn path_without_window_has_no_query_string() {
        let query = QueryDescriptor::build(
            "00044",
            DataCapability::Precipitation,
            TimeResolution::Daily,
            None,
        )
        .unwrap();
        assert_eq!(query.path(), "/00044/precipitation/daily");
    }

    #[test]
    fn path_with_bounded_window_appends_both_parameters() {
        let window = TimeWindow::bounded(
            Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 22, 0, 0, 0).unwrap(),
        );
        let query = QueryDescriptor::build(
            "00044",
            DataCapability::AirTemperature,
            TimeResolution::TenMinutes,
            Some(window),
        )
        .unwrap();
        assert_eq!(
            query.path(),
            "/00044/air_temperature/10_minutes?from=1703030400&until=1703203200"
        );
    }

    #[test]
    fn partially_bounded_window_never_emits_a_lone_parameter() {
        let from_only = TimeWindow::after(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let query = QueryDescriptor::build(
            "00044",
            DataCapability::Wind,
            TimeResolution::Hourly,
            Some(from_only),
        )
        .unwrap();
        assert_eq!(query.path(), "/00044/wind/hourly");
    }

    #[test]
    fn empty_station_id_is_rejected() {
        let result =
            QueryDescriptor::build("", DataCapability::Solar, TimeResolution::Daily, None);
        assert_eq!(result.unwrap_err(), QueryError::MissingStationId);
    }
}

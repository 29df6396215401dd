//! A time interval with optional bounds, used both for "what is available"
//! and for "what the caller requested".

use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pair of optional instants delimiting a time span.
///
/// An absent bound means "unbounded" on that side. When both bounds are set
/// the window is expected to satisfy `from <= until`; an inverted window is
/// rejected by [`crate::validate`] rather than silently reordered.
///
/// All instants are UTC. Date-only inputs are interpreted as midnight UTC,
/// which means a date-only `until` excludes the remainder of its final day
/// (see [`IntoUtcDateTime`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive lower bound, if any.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound, if any.
    pub until: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// A window with both bounds set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dwd_opendata::TimeWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = TimeWindow::bounded(
    ///     NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 12, 22).unwrap(),
    /// );
    /// assert_eq!(window.unix_bounds(), Some((1703030400, 1703203200)));
    /// ```
    pub fn bounded(from: impl IntoUtcDateTime, until: impl IntoUtcDateTime) -> Self {
        Self {
            from: Some(from.into_utc()),
            until: Some(until.into_utc()),
        }
    }

    /// A window bounded only from below.
    pub fn after(from: impl IntoUtcDateTime) -> Self {
        Self {
            from: Some(from.into_utc()),
            until: None,
        }
    }

    /// A window bounded only from above.
    pub fn before(until: impl IntoUtcDateTime) -> Self {
        Self {
            from: None,
            until: Some(until.into_utc()),
        }
    }

    /// A window with no bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `true` when both bounds are present.
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() && self.until.is_some()
    }

    /// Both bounds as integer seconds since the Unix epoch, or `None` when
    /// either bound is absent. This is the representation used in request
    /// query strings and artifact names.
    pub fn unix_bounds(&self) -> Option<(i64, i64)> {
        match (self.from, self.until) {
            (Some(from), Some(until)) => Some((from.timestamp(), until.timestamp())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn bounded_window_exposes_unix_seconds() {
        let window = TimeWindow::bounded(
            Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 22, 0, 0, 0).unwrap(),
        );
        assert!(window.is_bounded());
        assert_eq!(window.unix_bounds(), Some((1703030400, 1703203200)));
    }

    #[test]
    fn partial_windows_have_no_unix_bounds() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(TimeWindow::after(date).unix_bounds(), None);
        assert_eq!(TimeWindow::before(date).unix_bounds(), None);
        assert_eq!(TimeWindow::unbounded().unix_bounds(), None);
    }

    #[test]
    fn date_only_input_is_midnight_utc() {
        let window = TimeWindow::bounded(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        );
        let (from, until) = window.unix_bounds().unwrap();
        assert_eq!(from, 1577836800);
        assert_eq!(until - from, 86400);
    }
}

//! Validation of a requested time window against the availability window of
//! the selected series.

use crate::types::time_window::TimeWindow;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why a requested time window was rejected.
///
/// Each variant names the violated precondition so a shell can render an
/// actionable message rather than a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A request needs both bounds; at least one was absent.
    #[error("time range selection is incomplete: both start and end must be set")]
    IncompleteRange,

    /// The requested start lies after the requested end.
    #[error("time range start {from} is after its end {until}")]
    Inverted {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },

    /// The requested start precedes the earliest available instant.
    #[error("requested start {requested} is before the earliest available {available}")]
    RangeUnderflow {
        requested: DateTime<Utc>,
        available: DateTime<Utc>,
    },

    /// The requested end exceeds the latest available instant.
    #[error("requested end {requested} is after the latest available {available}")]
    RangeOverflow {
        requested: DateTime<Utc>,
        available: DateTime<Utc>,
    },
}

/// Checks `requested` against `available`.
///
/// Succeeds exactly when both requested bounds are present and
/// `available.from <= requested.from <= requested.until <= available.until`,
/// comparing seconds since the Unix epoch. Bounds are inclusive on both
/// ends, so a request spanning the entire availability window is valid. An
/// unbounded side of `available` imposes no limit on that side.
///
/// Date-only inputs were already reduced to midnight UTC when the window was
/// built (see [`crate::IntoUtcDateTime`]); a date-only end therefore stops
/// at the start of its final day. That truncation is deliberate and not
/// corrected here.
///
/// # Examples
///
/// ```
/// use dwd_opendata::{validate, RangeError, TimeWindow};
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let available = TimeWindow::bounded(date(2020, 1, 1), date(2023, 12, 31));
///
/// assert!(validate(&TimeWindow::bounded(date(2023, 12, 20), date(2023, 12, 22)), &available).is_ok());
/// assert_eq!(
///     validate(&TimeWindow::bounded(date(2019, 1, 1), date(2023, 12, 22)), &available),
///     Err(RangeError::RangeUnderflow {
///         requested: date(2019, 1, 1).and_hms_opt(0, 0, 0).unwrap().and_utc(),
///         available: date(2020, 1, 1).and_hms_opt(0, 0, 0).unwrap().and_utc(),
///     })
/// );
/// ```
pub fn validate(requested: &TimeWindow, available: &TimeWindow) -> Result<(), RangeError> {
    let (Some(from), Some(until)) = (requested.from, requested.until) else {
        return Err(RangeError::IncompleteRange);
    };

    if from.timestamp() > until.timestamp() {
        return Err(RangeError::Inverted { from, until });
    }

    if let Some(available_from) = available.from {
        if from.timestamp() < available_from.timestamp() {
            return Err(RangeError::RangeUnderflow {
                requested: from,
                available: available_from,
            });
        }
    }

    if let Some(available_until) = available.until {
        if until.timestamp() > available_until.timestamp() {
            return Err(RangeError::RangeOverflow {
                requested: until,
                available: available_until,
            });
        }
    }

    Ok(())
}

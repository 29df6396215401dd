use crate::emit::EmitError;
use crate::query::QueryError;
use crate::transport::TransportError;
use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::validate::RangeError;
use std::fmt;
use thiserror::Error;

/// The selection field whose absence blocked a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Station,
    DataType,
    Resolution,
    Window,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionField::Station => "station",
            SelectionField::DataType => "data type",
            SelectionField::Resolution => "resolution",
            SelectionField::Window => "time window",
        };
        write!(f, "{label}")
    }
}

/// Why a download run ended in the `Failed` state.
///
/// Validation-category failures are raised before any transport contact;
/// transport and emission failures after the asynchronous call resolved.
/// Nothing here is retried.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// A required selection field was never set.
    #[error("no {0} selected")]
    MissingSelection(SelectionField),

    /// The selected (data type, resolution) pair matches none of the
    /// station's capability records.
    #[error("station '{station_id}' offers no {data_type} series at {resolution} resolution")]
    NoMatchingCapability {
        station_id: String,
        data_type: DataCapability,
        resolution: TimeResolution,
    },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    /// The selection changed while the request was in flight; the response
    /// was discarded instead of being attached to the new selection.
    #[error("selection changed while the request was in flight")]
    SelectionSuperseded,
}

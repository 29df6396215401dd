mod capability_index;
mod catalog;
mod download;
mod dwd_opendata;
mod emit;
mod error;
mod query;
mod stations;
mod transport;
mod types;
mod validate;

pub use error::DwdOpendataError;
pub use dwd_opendata::*;

pub use capability_index::{availability_window, resolutions_for};
pub use catalog::StationCatalog;
pub use query::{QueryDescriptor, QueryError};
pub use validate::{validate, RangeError};

pub use download::error::{DownloadError, SelectionField};
pub use download::orchestrator::{DownloadOrchestrator, DownloadState};

pub use emit::{artifact_name, DiskEmitter, EmitError, FileEmitter};
pub use transport::{DataTransport, HttpTransport, TransportError};

pub use stations::discovery::fetch_stations;
pub use stations::error::DiscoveryError;

pub use types::capability::{DataCapability, UnknownTag};
pub use types::filter::FilterState;
pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::resolution::TimeResolution;
pub use types::selection::Selection;
pub use types::station::{CapabilityRecord, GeoPoint, Station};
pub use types::time_window::TimeWindow;

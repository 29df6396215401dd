//! This module provides the main entry point for interacting with the DWD
//! open-data station portal. It discovers the station set, applies the
//! caller's filters, and hands out download orchestrators wired to the
//! default HTTP transport and disk emitter.

use crate::catalog::StationCatalog;
use crate::download::orchestrator::DownloadOrchestrator;
use crate::emit::DiskEmitter;
use crate::error::DwdOpendataError;
use crate::stations::discovery::fetch_stations;
use crate::transport::HttpTransport;
use crate::types::filter::FilterState;
use crate::types::station::Station;
use bon::bon;
use log::info;
use std::path::PathBuf;

/// The main client for the DWD open-data station portal.
///
/// Holds the provider prefix, the HTTP client, and the station catalog of
/// the current discovery session. Discovery must run once before stations
/// can be filtered or downloaded from; downloads themselves go through a
/// [`DownloadOrchestrator`] obtained via [`DwdOpendata::downloader`].
///
/// # Examples
///
/// ```no_run
/// # use dwd_opendata::{DwdOpendata, DwdOpendataError, DataCapability, FilterState};
/// # async fn run() -> Result<(), DwdOpendataError> {
/// let mut client = DwdOpendata::builder()
///     .provider_prefix("https://opendata.example/weather")
///     .build();
/// client.discover_stations().await?;
///
/// let mut filter = FilterState::new();
/// filter.set_capability(DataCapability::AirTemperature, true);
/// filter.include_historical = false;
/// for station in client.visible_stations(&filter) {
///     println!("{} ({})", station.name, station.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DwdOpendata {
    http: reqwest::Client,
    provider_prefix: String,
    artifact_prefix: String,
    catalog: StationCatalog,
}

#[bon]
impl DwdOpendata {
    /// Creates a client for the provider at `provider_prefix`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.provider_prefix(String)`: **Required.** Base URL of the provider,
    ///   with or without a trailing slash.
    /// * `.artifact_prefix(Option<String>)`: Optional. First component of
    ///   emitted artifact names. Defaults to `"dwd"`.
    #[builder]
    pub fn new(
        #[builder(into)] provider_prefix: String,
        #[builder(into)] artifact_prefix: Option<String>,
    ) -> Self {
        let artifact_prefix = artifact_prefix.unwrap_or_else(|| "dwd".to_string());
        Self {
            http: reqwest::Client::new(),
            provider_prefix: provider_prefix.trim_end_matches('/').to_string(),
            artifact_prefix,
            catalog: StationCatalog::new(),
        }
    }

    /// Fetches the provider's station set and replaces the catalog with it.
    ///
    /// # Returns
    ///
    /// The number of discovered stations.
    ///
    /// # Errors
    ///
    /// Returns [`DwdOpendataError::Discovery`] variants when the request
    /// fails or the payload does not parse as station records.
    pub async fn discover_stations(&mut self) -> Result<usize, DwdOpendataError> {
        let stations = fetch_stations(&self.http, &self.provider_prefix).await?;
        info!("station discovery returned {} stations", stations.len());
        self.catalog.set_stations(stations);
        Ok(self.catalog.len())
    }

    /// The station catalog of the current discovery session.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// The subset of discovered stations passing `filter`; see
    /// [`StationCatalog::visible_stations`].
    pub fn visible_stations(&self, filter: &FilterState) -> Vec<&Station> {
        self.catalog.visible_stations(filter)
    }

    /// Creates a download orchestrator writing artifacts into `target_dir`,
    /// wired to this client's provider over HTTP.
    ///
    /// The orchestrator starts with an empty selection; drive it with its
    /// `select_*` methods and
    /// [`start_download`](DownloadOrchestrator::start_download).
    pub fn downloader(
        &self,
        target_dir: impl Into<PathBuf>,
    ) -> DownloadOrchestrator<HttpTransport, DiskEmitter> {
        DownloadOrchestrator::new(
            HttpTransport::new(self.http.clone(), self.provider_prefix.clone()),
            DiskEmitter::new(target_dir),
            self.artifact_prefix.clone(),
        )
    }
}

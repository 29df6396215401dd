//! Drives one download end to end: check the selection, validate the
//! requested window, build the query, execute it through the transport
//! collaborator, and hand the payload to the file-emission collaborator.

use crate::capability_index::availability_window;
use crate::download::error::{DownloadError, SelectionField};
use crate::emit::{artifact_name, FileEmitter};
use crate::query::QueryDescriptor;
use crate::transport::DataTransport;
use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::selection::Selection;
use crate::types::station::Station;
use crate::types::time_window::TimeWindow;
use log::{debug, warn};

/// Where a download run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    Idle,
    Validating,
    Requesting,
    Succeeded,
    Failed,
}

/// The download state machine: `Idle`, `Validating`, `Requesting`, then
/// `Succeeded` or `Failed`.
///
/// One orchestrator drives at most one request at a time;
/// [`DownloadOrchestrator::start_download`] borrows the orchestrator
/// exclusively, so a second call cannot begin until the previous run has
/// reached a terminal state. After `Succeeded` or `Failed` the same
/// instance may start a fresh run.
///
/// Selection mutations go through the orchestrator so that picking a new
/// station atomically clears data type, resolution, and window (see
/// [`Selection`]), and so that a response resolving after the selection
/// moved on is discarded rather than emitted under the new selection's
/// name.
pub struct DownloadOrchestrator<T, E> {
    transport: T,
    emitter: E,
    artifact_prefix: String,
    selection: Selection,
    state: DownloadState,
}

impl<T, E> DownloadOrchestrator<T, E>
where
    T: DataTransport,
    E: FileEmitter,
{
    pub fn new(transport: T, emitter: E, artifact_prefix: impl Into<String>) -> Self {
        Self {
            transport,
            emitter,
            artifact_prefix: artifact_prefix.into(),
            selection: Selection::new(),
            state: DownloadState::Idle,
        }
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selects the station to download from, clearing data type,
    /// resolution, and window.
    pub fn select_station(&mut self, station: Station) {
        self.selection.select_station(station);
    }

    /// Selects the data type, clearing resolution and window.
    pub fn select_data_type(&mut self, data_type: DataCapability) {
        self.selection.select_data_type(data_type);
    }

    /// Selects the resolution, clearing the window.
    pub fn select_resolution(&mut self, resolution: TimeResolution) {
        self.selection.select_resolution(resolution);
    }

    /// Selects the requested time window.
    pub fn select_window(&mut self, window: TimeWindow) {
        self.selection.select_window(window);
    }

    /// Drops the current selection entirely.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Runs one download for the current selection and returns the emitted
    /// artifact name.
    ///
    /// Every selection field must be set; the first absent one fails the
    /// run with [`DownloadError::MissingSelection`] naming that field,
    /// before any transport contact. Validation always completes before the
    /// transport is called; a validation failure surfaces the validator's
    /// reason unretried.
    ///
    /// # Errors
    ///
    /// * [`DownloadError::MissingSelection`]: a selection field is unset.
    /// * [`DownloadError::NoMatchingCapability`]: the selected pair has no
    ///   availability record on the selected station.
    /// * [`DownloadError::Range`]: the requested window failed validation.
    /// * [`DownloadError::Transport`]: the provider request failed.
    /// * [`DownloadError::Emit`]: persisting the payload failed.
    pub async fn start_download(&mut self) -> Result<String, DownloadError> {
        match self.run().await {
            Ok(artifact) => {
                self.state = DownloadState::Succeeded;
                debug!("download succeeded, artifact '{artifact}'");
                Ok(artifact)
            }
            Err(e) => {
                self.state = DownloadState::Failed;
                warn!("download failed: {e}");
                Err(e)
            }
        }
    }

    async fn run(&mut self) -> Result<String, DownloadError> {
        let station = self
            .selection
            .station()
            .ok_or(DownloadError::MissingSelection(SelectionField::Station))?
            .clone();
        let data_type = self
            .selection
            .data_type()
            .ok_or(DownloadError::MissingSelection(SelectionField::DataType))?;
        let resolution = self
            .selection
            .resolution()
            .ok_or(DownloadError::MissingSelection(SelectionField::Resolution))?;
        let window = self
            .selection
            .window()
            .ok_or(DownloadError::MissingSelection(SelectionField::Window))?;

        self.state = DownloadState::Validating;
        let available = availability_window(&station, data_type, resolution).ok_or_else(|| {
            DownloadError::NoMatchingCapability {
                station_id: station.id.clone(),
                data_type,
                resolution,
            }
        })?;
        crate::validate::validate(&window, &available)?;

        self.state = DownloadState::Requesting;
        let query = QueryDescriptor::build(&station.id, data_type, resolution, Some(window))?;
        debug!("requesting {}", query.path());
        let epoch = self.selection.epoch();
        let payload = self.transport.fetch(&query).await?;

        if !self.response_is_current(epoch) {
            return Err(DownloadError::SelectionSuperseded);
        }

        let artifact = artifact_name(
            &self.artifact_prefix,
            &station.name,
            data_type,
            resolution,
            Some(&window),
        );
        self.emitter.emit(&artifact, &payload).await?;
        Ok(artifact)
    }

    // A response may only be applied while the selection it was issued for
    // is still the current one.
    fn response_is_current(&self, epoch: u64) -> bool {
        self.selection.epoch() == epoch
    }
}

use crate::download::error::DownloadError;
use crate::stations::error::DiscoveryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DwdOpendataError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

//! The file-emission collaborator boundary: hands a downloaded payload to
//! the user's device under a deterministic artifact name.

use crate::types::capability::DataCapability;
use crate::types::resolution::TimeResolution;
use crate::types::time_window::TimeWindow;
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize payload for artifact '{0}'")]
    Serialize(String, #[source] serde_json::Error),

    #[error("failed to write artifact '{0}'")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Persists one downloaded payload under the given artifact name.
pub trait FileEmitter {
    fn emit(
        &self,
        name: &str,
        payload: &Value,
    ) -> impl Future<Output = Result<(), EmitError>> + Send;
}

/// The deterministic artifact name for one download:
/// `{prefix}_{stationName}_{dataType}_{resolution}_{from}_{until}`, fields
/// joined by underscores, absent window bounds simply omitted. Bounds are
/// rendered as integer unix seconds, the same representation the request
/// query string uses.
pub fn artifact_name(
    prefix: &str,
    station_name: &str,
    data_type: DataCapability,
    resolution: TimeResolution,
    window: Option<&TimeWindow>,
) -> String {
    let mut parts = vec![
        prefix.to_string(),
        station_name.to_string(),
        data_type.to_string(),
        resolution.to_string(),
    ];
    if let Some(window) = window {
        if let Some(from) = window.from {
            parts.push(from.timestamp().to_string());
        }
        if let Some(until) = window.until {
            parts.push(until.timestamp().to_string());
        }
    }
    parts.join("_")
}

/// The default emitter: writes `{name}.json` into a target directory.
#[derive(Debug, Clone)]
pub struct DiskEmitter {
    target_dir: PathBuf,
}

impl DiskEmitter {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// The path an artifact of the given name would be written to.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.target_dir.join(format!("{name}.json"))
    }
}

impl FileEmitter for DiskEmitter {
    async fn emit(&self, name: &str, payload: &Value) -> Result<(), EmitError> {
        let bytes = serde_json::to_vec_pretty(payload)
            .map_err(|e| EmitError::Serialize(name.to_string(), e))?;
        let path = self.artifact_path(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| EmitError::Write(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn window() -> TimeWindow {
        TimeWindow::bounded(
            Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 22, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn artifact_name_joins_all_fields() {
        let name = artifact_name(
            "dwd",
            "Grossenkneten",
            DataCapability::AirTemperature,
            TimeResolution::TenMinutes,
            Some(&window()),
        );
        assert_eq!(
            name,
            "dwd_Grossenkneten_air_temperature_10_minutes_1703030400_1703203200"
        );
    }

    #[test]
    fn artifact_name_omits_absent_window_fields() {
        let name = artifact_name(
            "dwd",
            "Grossenkneten",
            DataCapability::Solar,
            TimeResolution::Daily,
            None,
        );
        assert_eq!(name, "dwd_Grossenkneten_solar_daily");

        let until_only =
            TimeWindow::before(Utc.with_ymd_and_hms(2023, 12, 22, 0, 0, 0).unwrap());
        let name = artifact_name(
            "dwd",
            "Grossenkneten",
            DataCapability::Solar,
            TimeResolution::Daily,
            Some(&until_only),
        );
        assert_eq!(name, "dwd_Grossenkneten_solar_daily_1703203200");
    }

    #[tokio::test]
    async fn disk_emitter_writes_the_payload_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = DiskEmitter::new(dir.path());
        let payload = json!({"series": [{"timestamp": 1703030400, "value": 3.4}]});

        emitter.emit("dwd_test_artifact", &payload).await.unwrap();

        let written = tokio::fs::read(dir.path().join("dwd_test_artifact.json"))
            .await
            .unwrap();
        let round_trip: Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(round_trip, payload);
    }

    #[tokio::test]
    async fn disk_emitter_reports_unwritable_target() {
        let emitter = DiskEmitter::new("/nonexistent-target-dir/nested");
        let err = emitter
            .emit("artifact", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, EmitError::Write(_, _)));
    }
}

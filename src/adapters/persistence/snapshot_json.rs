//! Implements DashboardSource by reading a JSON snapshot from disk.
//!
//! The file holds one `DashboardResponse` document (same shape as the API returns),
//! e.g. a saved copy of `GET /dashboard/?month=...`.

use crate::domain::{DashboardResponse, DomainError, MonthKey};
use crate::ports::DashboardSource;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// JSON file-based dashboard source. Re-reads the file on every fetch.
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl DashboardSource for SnapshotFileSource {
    async fn fetch_dashboard(&self, month: &MonthKey) -> Result<DashboardResponse, DomainError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Snapshot(format!("read {}: {}", self.path.display(), e)))?;
        let data: DashboardResponse = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Snapshot(format!("parse {}: {}", self.path.display(), e)))?;
        info!(
            path = %self.path.display(),
            month = %month,
            rooms = data.rooms.len(),
            expenses = data.expenses.len(),
            "loaded dashboard snapshot"
        );
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

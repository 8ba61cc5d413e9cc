//! Export service. Writes the audit CSV (full expense feed) for a dashboard view.

use crate::adapters::export::expenses_to_csv;
use crate::domain::DomainError;
use crate::usecases::DashboardView;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

pub struct ExportService {
    exports_dir: PathBuf,
}

impl ExportService {
    /// # Arguments
    /// * `exports_dir` - Directory for generated files (created on first export)
    pub fn new(exports_dir: PathBuf) -> Self {
        Self { exports_dir }
    }

    /// Write `audit_{month}.csv` with every expense in the snapshot. Overwrites an
    /// earlier export of the same month. Returns the file path.
    pub async fn export_audit(&self, view: &DashboardView) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.exports_dir)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to create exports dir: {}", e)))?;

        let csv = expenses_to_csv(&view.snapshot.expenses)
            .map_err(|e| DomainError::Export(format!("Failed to generate CSV: {}", e)))?;

        let path = self.exports_dir.join(format!("audit_{}.csv", view.month));
        fs::write(&path, csv)
            .await
            .map_err(|e| DomainError::Export(format!("Failed to write audit: {}", e)))?;

        info!(
            path = %path.display(),
            expenses = view.snapshot.expenses.len(),
            "audit exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::mock_source::mock_dashboard;
    use crate::domain::MonthKey;

    #[tokio::test]
    async fn test_export_audit_writes_all_expenses() {
        let dir = tempfile::tempdir().unwrap();
        let exports = dir.path().join("exports");
        let service = ExportService::new(exports.clone());
        let view = DashboardView::from_snapshot(MonthKey::parse("2023-10").unwrap(), mock_dashboard());

        let path = service.export_audit(&view).await.unwrap();

        assert_eq!(path, exports.join("audit_2023-10.csv"));
        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Id;Date;Description;Amount"));
        assert_eq!(lines.count(), view.snapshot.expenses.len());
    }
}

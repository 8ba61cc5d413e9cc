//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DashboardResponse, DomainError, MonthKey};

/// Where dashboard snapshots come from (remote API, local file, mock data).
#[async_trait::async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the full snapshot for `month`. Single attempt; failures surface as-is.
    ///
    /// Sources may return expenses outside `month`; month filtering is done by the
    /// summary calculator, not trusted to the source.
    async fn fetch_dashboard(&self, month: &MonthKey) -> Result<DashboardResponse, DomainError>;

    /// Short label for logs and the status line.
    fn name(&self) -> &'static str;
}

//! HTTP adapter. Implements DashboardSource against the house ledger REST API.

use crate::domain::{DashboardResponse, DomainError, MonthKey};
use crate::ports::DashboardSource;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Dashboard API client: `GET {base_url}/dashboard/?month=YYYY-MM`.
///
/// One request per call. No retry or backoff; any failure is returned to the caller.
pub struct HttpDashboardSource {
    client: Client,
    base_url: String,
}

impl HttpDashboardSource {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. "http://127.0.0.1:8000/api" (trailing slash optional)
    /// * `timeout` - Whole-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn dashboard_url(&self) -> String {
        format!("{}/dashboard/", self.base_url)
    }
}

#[async_trait::async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_dashboard(&self, month: &MonthKey) -> Result<DashboardResponse, DomainError> {
        let url = self.dashboard_url();
        debug!(url = %url, month = %month, "fetching dashboard");

        let response = self
            .client
            .get(&url)
            .query(&[("month", month.as_str())])
            .send()
            .await
            .map_err(|e| DomainError::fetch(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, month = %month, "dashboard API returned error");
            return Err(DomainError::http_status(status.as_u16()));
        }

        let data: DashboardResponse = response
            .json()
            .await
            .map_err(|e| DomainError::fetch(format!("Failed to parse dashboard response: {}", e)))?;

        info!(
            month = %month,
            rooms = data.rooms.len(),
            expenses = data.expenses.len(),
            "dashboard fetched"
        );
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

//! Mock dashboard source for development and testing without a backend.
//!
//! Returns a fixed house ledger data set. The requested month is ignored, the same
//! way the static mock data behaves in the web dashboard: month filtering happens
//! in the summary calculator.

use crate::domain::{
    Announcement, DashboardResponse, DomainError, Expense, MonthKey, RoomContribution,
};
use crate::ports::DashboardSource;
use std::time::Duration;
use tracing::info;

/// Mock dashboard source.
///
/// Simulates network latency with configurable delay.
pub struct MockDashboardSource {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockDashboardSource {
    /// Create a new mock source with default delay (150ms).
    pub fn new() -> Self {
        Self { delay_ms: 150 }
    }

    /// Create a mock source with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockDashboardSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DashboardSource for MockDashboardSource {
    async fn fetch_dashboard(&self, month: &MonthKey) -> Result<DashboardResponse, DomainError> {
        info!(month = %month, "[MOCK] serving built-in ledger data");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(mock_dashboard())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn room(name: &str, month_total: f64, overall_total: f64) -> RoomContribution {
    RoomContribution {
        room: name.to_string(),
        month_total,
        overall_total,
    }
}

fn expense(id: &str, date_added: &str, description: &str, amount: f64) -> Expense {
    Expense {
        id: id.to_string(),
        date_added: date_added.to_string(),
        description: description.to_string(),
        amount,
    }
}

/// The built-in data set: six rooms, two months of expenses, a few announcements.
pub fn mock_dashboard() -> DashboardResponse {
    DashboardResponse {
        rooms: vec![
            room("Room 1", 5000.0, 50000.0),
            room("Room 2", 5000.0, 45000.0),
            room("Room 3", 3000.0, 30000.0),
            room("Room 4", 0.0, 25000.0),
            room("Room 5", 5000.0, 40000.0),
            room("Room 6", 0.0, 15000.0),
        ],
        expenses: vec![
            expense("exp-101", "2023-10-02", "Generator diesel", 4500.0),
            expense("exp-102", "2023-10-05", "Water bill", 1200.0),
            expense("exp-103", "2023-10-11", "Compound cleaning", 2000.0),
            expense("exp-104", "2023-10-19", "Light bulbs (corridor)", 850.0),
            expense("exp-091", "2023-09-03", "Generator diesel", 4200.0),
            expense("exp-092", "2023-09-14", "Borehole pump repair", 6500.0),
            expense("exp-093", "2023-09-20", "Waste disposal levy", 800.0),
        ],
        announcements: vec![
            Announcement {
                message: "October contributions are due by the 10th.".to_string(),
                is_important: true,
            },
            Announcement {
                message: "Borehole pump was serviced on 14 September.".to_string(),
                is_important: false,
            },
            Announcement {
                message: "House meeting on the last Saturday of the month.".to_string(),
                is_important: false,
            },
        ],
        summary: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary;

    #[tokio::test]
    async fn test_mock_source() {
        let source = MockDashboardSource::with_delay(1);
        let month = MonthKey::parse("2023-10").unwrap();

        let data = source.fetch_dashboard(&month).await.unwrap();

        assert_eq!(data.rooms.len(), 6);
        assert_eq!(data.expenses.len(), 7);
        assert_eq!(source.name(), "mock");
    }

    #[test]
    fn test_mock_data_figures() {
        let data = mock_dashboard();
        let month = MonthKey::parse("2023-10").unwrap();
        let monthly = summary::monthly_summary(&data.rooms, &data.expenses, &month);
        assert_eq!(monthly.total_contributions, 18000.0);
        assert_eq!(monthly.total_expenses, 8550.0);
        assert_eq!(monthly.balance, 9450.0);

        let lifetime = summary::lifetime_summary(&data.rooms, &data.expenses);
        assert_eq!(lifetime.total_contributions, 205000.0);
        assert_eq!(lifetime.total_expenses, 20050.0);
    }
}

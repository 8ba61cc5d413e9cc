//! Dashboard service: fetch a snapshot for a month and derive every figure the view shows.
//!
//! - Fetches through the `DashboardSource` port (single attempt)
//! - Derives monthly/lifetime summaries with the summary calculator
//! - Cross-checks the server's own summary when one is sent

use crate::domain::summary;
use crate::domain::{
    CashFlowSplit, DashboardResponse, DomainError, Expense, LifetimeSummary, MonthKey,
    MonthlySummary,
};
use crate::ports::DashboardSource;
use std::sync::Arc;
use tracing::{info, warn};

/// Tolerance for comparing server and local figures (amounts are in whole currency units).
const SUMMARY_TOLERANCE: f64 = 0.005;

/// Everything one render of the dashboard needs.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub month: MonthKey,
    pub snapshot: DashboardResponse,
    pub monthly: MonthlySummary,
    pub lifetime: LifetimeSummary,
    pub split: CashFlowSplit,
    pub paid_rooms: usize,
}

impl DashboardView {
    pub fn from_snapshot(month: MonthKey, snapshot: DashboardResponse) -> Self {
        let monthly = summary::monthly_summary(&snapshot.rooms, &snapshot.expenses, &month);
        let lifetime = summary::lifetime_summary(&snapshot.rooms, &snapshot.expenses);
        let split = summary::cash_flow_split(&monthly);
        let paid_rooms = summary::paid_rooms(&snapshot.rooms);
        Self {
            month,
            snapshot,
            monthly,
            lifetime,
            split,
            paid_rooms,
        }
    }

    /// Expenses dated in the selected month.
    pub fn month_expenses(&self) -> Vec<&Expense> {
        summary::filter_expenses_by_month(&self.snapshot.expenses, self.month.as_str())
    }

    /// Compact feed (selected month) or expanded history (every expense).
    pub fn feed(&self, show_all: bool) -> Vec<&Expense> {
        if show_all {
            self.snapshot.expenses.iter().collect()
        } else {
            self.month_expenses()
        }
    }
}

/// Dashboard service. Stateless apart from the injected source.
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch the snapshot for `month` and derive the view. Fetch errors are returned as-is.
    pub async fn load(&self, month: &MonthKey) -> Result<DashboardView, DomainError> {
        let snapshot = self.source.fetch_dashboard(month).await?;
        let server_summary = snapshot.summary.clone();
        let view = DashboardView::from_snapshot(month.clone(), snapshot);

        if let Some(server) = server_summary {
            if !summaries_agree(&server, &view.monthly) {
                warn!(
                    month = %month,
                    server_contributions = server.total_contributions,
                    server_expenses = server.total_expenses,
                    local_contributions = view.monthly.total_contributions,
                    local_expenses = view.monthly.total_expenses,
                    "server summary differs from derived figures; using derived"
                );
            }
        }

        info!(
            month = %month,
            source = self.source.name(),
            rooms = view.snapshot.rooms.len(),
            month_expenses = view.month_expenses().len(),
            contributions = view.monthly.total_contributions,
            expenses = view.monthly.total_expenses,
            balance = view.monthly.balance,
            "dashboard loaded"
        );

        Ok(view)
    }
}

fn summaries_agree(server: &MonthlySummary, local: &MonthlySummary) -> bool {
    (server.total_contributions - local.total_contributions).abs() < SUMMARY_TOLERANCE
        && (server.total_expenses - local.total_expenses).abs() < SUMMARY_TOLERANCE
        && (server.balance - local.balance).abs() < SUMMARY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockDashboardSource;
    use crate::domain::{Expense, RoomContribution};

    struct FailingSource;

    #[async_trait::async_trait]
    impl DashboardSource for FailingSource {
        async fn fetch_dashboard(&self, _month: &MonthKey) -> Result<DashboardResponse, DomainError> {
            Err(DomainError::http_status(503))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn october() -> MonthKey {
        MonthKey::parse("2023-10").unwrap()
    }

    #[tokio::test]
    async fn test_load_from_mock() {
        let service = DashboardService::new(Arc::new(MockDashboardSource::with_delay(1)));
        let view = service.load(&october()).await.unwrap();

        assert_eq!(view.monthly.month_name, "October 2023");
        assert_eq!(view.monthly.total_contributions, 18000.0);
        assert_eq!(view.monthly.total_expenses, 8550.0);
        assert_eq!(view.lifetime.balance, 205000.0 - 20050.0);
        assert_eq!(view.paid_rooms, 4);
        assert_eq!(view.month_expenses().len(), 4);
        assert_eq!(view.feed(true).len(), 7);
        assert_eq!(view.feed(false).len(), 4);
    }

    #[tokio::test]
    async fn test_load_propagates_fetch_error() {
        let service = DashboardService::new(Arc::new(FailingSource));
        let err = service.load(&october()).await.unwrap_err();
        assert!(matches!(err, DomainError::Fetch { status: Some(503), .. }));
    }

    #[test]
    fn test_view_spec_example() {
        let snapshot = DashboardResponse {
            rooms: vec![
                RoomContribution {
                    room: "A".into(),
                    month_total: 5000.0,
                    overall_total: 50000.0,
                },
                RoomContribution {
                    room: "B".into(),
                    month_total: 3000.0,
                    overall_total: 30000.0,
                },
            ],
            expenses: vec![
                Expense {
                    id: "1".into(),
                    date_added: "2023-10-05".into(),
                    description: "Water".into(),
                    amount: 1200.0,
                },
                Expense {
                    id: "2".into(),
                    date_added: "2023-09-20".into(),
                    description: "Diesel".into(),
                    amount: 800.0,
                },
            ],
            ..Default::default()
        };
        let view = DashboardView::from_snapshot(october(), snapshot);
        assert_eq!(view.monthly.total_contributions, 8000.0);
        assert_eq!(view.monthly.total_expenses, 1200.0);
        assert_eq!(view.monthly.balance, 6800.0);
        assert_eq!(view.lifetime.total_contributions, 80000.0);
        assert_eq!(view.month_expenses().len(), 1);
    }

    #[test]
    fn test_summaries_agree() {
        let a = MonthlySummary {
            month_name: "October 2023".into(),
            total_contributions: 8000.0,
            total_expenses: 1200.0,
            balance: 6800.0,
        };
        let mut b = a.clone();
        assert!(summaries_agree(&a, &b));
        b.total_expenses = 1300.0;
        assert!(!summaries_agree(&a, &b));
    }
}

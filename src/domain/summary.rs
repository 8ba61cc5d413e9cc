//! Summary calculator. Derives monthly and lifetime figures from ledger records.
//!
//! Every function here is pure: no I/O, no validation. Amounts are summed as
//! delivered (negative or NaN inputs propagate). Sums fold left from 0 in input order.

use crate::domain::entities::{
    CashFlowSplit, ContributionTotals, Expense, LifetimeSummary, MonthlySummary, RoomContribution,
};
use crate::domain::month::MonthKey;

/// Expenses whose `date_added` starts with `month` ("YYYY-MM"). Order preserved.
///
/// Membership is a plain string-prefix test; dates in other formats are not normalized.
pub fn filter_expenses_by_month<'a>(expenses: &'a [Expense], month: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.date_added.starts_with(month))
        .collect()
}

/// Sums `month_total` (monthly figure) and `overall_total` (lifetime figure).
pub fn sum_contributions(rooms: &[RoomContribution]) -> ContributionTotals {
    rooms
        .iter()
        .fold(ContributionTotals::default(), |acc, r| ContributionTotals {
            month_total: acc.month_total + r.month_total,
            overall_total: acc.overall_total + r.overall_total,
        })
}

/// Sums `amount`. Accepts a slice or the output of [`filter_expenses_by_month`].
pub fn sum_expenses<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().fold(0.0, |acc, e| acc + e.amount)
}

/// Contributions minus expenses. May be negative.
pub fn compute_balance(contributions: f64, expenses: f64) -> f64 {
    contributions - expenses
}

pub fn monthly_summary(
    rooms: &[RoomContribution],
    expenses: &[Expense],
    month: &MonthKey,
) -> MonthlySummary {
    let total_contributions = sum_contributions(rooms).month_total;
    let total_expenses = sum_expenses(filter_expenses_by_month(expenses, month.as_str()));
    MonthlySummary {
        month_name: month.month_name(),
        total_contributions,
        total_expenses,
        balance: compute_balance(total_contributions, total_expenses),
    }
}

pub fn lifetime_summary(rooms: &[RoomContribution], expenses: &[Expense]) -> LifetimeSummary {
    let total_contributions = sum_contributions(rooms).overall_total;
    let total_expenses = sum_expenses(expenses);
    LifetimeSummary {
        total_contributions,
        total_expenses,
        balance: compute_balance(total_contributions, total_expenses),
    }
}

/// Inflow/outflow shares of a month's total flow. Both zero when nothing moved.
pub fn cash_flow_split(summary: &MonthlySummary) -> CashFlowSplit {
    let total = summary.total_contributions + summary.total_expenses;
    if total == 0.0 {
        return CashFlowSplit::default();
    }
    CashFlowSplit {
        inflow_share: summary.total_contributions / total,
        outflow_share: summary.total_expenses / total,
    }
}

/// Rooms that contributed something this month.
pub fn paid_rooms(rooms: &[RoomContribution]) -> usize {
    rooms.iter().filter(|r| r.month_total > 0.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, month_total: f64, overall_total: f64) -> RoomContribution {
        RoomContribution {
            room: name.to_string(),
            month_total,
            overall_total,
        }
    }

    fn expense(id: &str, date: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date_added: date.to_string(),
            description: format!("expense {}", id),
            amount,
        }
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense("e1", "2023-10-05", 1200.0),
            expense("e2", "2023-09-20", 800.0),
            expense("e3", "2023-10-28", 450.0),
            expense("e4", "2022-10-01", 99.0),
            expense("e5", "Oct 3, 2023", 10.0),
        ]
    }

    #[test]
    fn test_filter_example() {
        let expenses = vec![
            expense("e1", "2023-10-05", 1200.0),
            expense("e2", "2023-09-20", 800.0),
        ];
        let filtered = filter_expenses_by_month(&expenses, "2023-10");
        assert_eq!(filtered, vec![&expenses[0]]);
        assert_eq!(sum_expenses(filtered), 1200.0);
    }

    #[test]
    fn test_filter_partitions_by_prefix() {
        let expenses = sample_expenses();
        let month = "2023-10";
        let filtered = filter_expenses_by_month(&expenses, month);

        assert!(filtered.iter().all(|e| e.date_added.starts_with(month)));
        for e in &expenses {
            let included = filtered.iter().any(|f| std::ptr::eq(*f, e));
            assert_eq!(included, e.date_added.starts_with(month));
        }
        // Order preserved.
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e3"]);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_expenses_by_month(&[], "2023-10").is_empty());
    }

    #[test]
    fn test_sum_contributions_example() {
        let rooms = vec![room("A", 5000.0, 50000.0), room("B", 3000.0, 30000.0)];
        let totals = sum_contributions(&rooms);
        assert_eq!(totals.month_total, 8000.0);
        assert_eq!(totals.overall_total, 80000.0);
    }

    #[test]
    fn test_sum_contributions_empty_is_zero() {
        assert_eq!(sum_contributions(&[]), ContributionTotals::default());
        assert_eq!(sum_expenses(&Vec::<Expense>::new()), 0.0);
    }

    #[test]
    fn test_sum_contributions_order_independent() {
        let rooms = vec![
            room("A", 5000.0, 50000.0),
            room("B", 3000.0, 30000.0),
            room("C", 0.0, 12500.0),
        ];
        let mut reversed = rooms.clone();
        reversed.reverse();
        assert_eq!(sum_contributions(&rooms), sum_contributions(&reversed));
    }

    #[test]
    fn test_negative_amounts_propagate() {
        let rooms = vec![room("A", -100.0, 10.0)];
        assert_eq!(sum_contributions(&rooms).month_total, -100.0);
    }

    #[test]
    fn test_compute_balance() {
        assert_eq!(compute_balance(8000.0, 1200.0), 6800.0);
        assert_eq!(compute_balance(1000.0, 2500.0), -1500.0);
        assert_eq!(compute_balance(-5.0, -7.5), 2.5);
    }

    #[test]
    fn test_monthly_summary() {
        let rooms = vec![room("A", 5000.0, 50000.0), room("B", 3000.0, 30000.0)];
        let expenses = sample_expenses();
        let month = MonthKey::parse("2023-10").unwrap();
        let summary = monthly_summary(&rooms, &expenses, &month);
        assert_eq!(summary.month_name, "October 2023");
        assert_eq!(summary.total_contributions, 8000.0);
        assert_eq!(summary.total_expenses, 1650.0);
        assert_eq!(summary.balance, 6350.0);
    }

    #[test]
    fn test_lifetime_summary() {
        let rooms = vec![room("A", 5000.0, 50000.0), room("B", 3000.0, 30000.0)];
        let expenses = sample_expenses();
        let lifetime = lifetime_summary(&rooms, &expenses);
        assert_eq!(lifetime.total_contributions, 80000.0);
        assert_eq!(lifetime.total_expenses, 2559.0);
        assert_eq!(lifetime.balance, 77441.0);
    }

    #[test]
    fn test_idempotent() {
        let rooms = vec![room("A", 0.1, 0.2), room("B", 0.7, 1.3)];
        let expenses = sample_expenses();
        let month = MonthKey::parse("2023-10").unwrap();
        let a = monthly_summary(&rooms, &expenses, &month);
        let b = monthly_summary(&rooms, &expenses, &month);
        assert_eq!(a.total_contributions.to_bits(), b.total_contributions.to_bits());
        assert_eq!(a.total_expenses.to_bits(), b.total_expenses.to_bits());
        assert_eq!(a.balance.to_bits(), b.balance.to_bits());
    }

    #[test]
    fn test_cash_flow_split() {
        let summary = MonthlySummary {
            month_name: "October 2023".into(),
            total_contributions: 3000.0,
            total_expenses: 1000.0,
            balance: 2000.0,
        };
        let split = cash_flow_split(&summary);
        assert_eq!(split.inflow_share, 0.75);
        assert_eq!(split.outflow_share, 0.25);

        let empty = MonthlySummary {
            total_contributions: 0.0,
            total_expenses: 0.0,
            balance: 0.0,
            ..summary
        };
        assert_eq!(cash_flow_split(&empty), CashFlowSplit::default());
    }

    #[test]
    fn test_paid_rooms() {
        let rooms = vec![
            room("A", 5000.0, 50000.0),
            room("B", 0.0, 30000.0),
            room("C", 2500.0, 2500.0),
        ];
        assert_eq!(paid_rooms(&rooms), 2);
    }
}

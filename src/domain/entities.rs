//! Domain entities. Pure data structures for the core business.
//!
//! Field names match the dashboard API's JSON so snapshots deserialize directly.

use serde::{Deserialize, Serialize};

/// One room's contributions: this month and since the house ledger started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomContribution {
    pub room: String,
    pub month_total: f64,
    pub overall_total: f64,
}

/// A shared expense. `date_added` is the raw ISO-like date from the source ("2023-10-05").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date_added: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub message: String,
    #[serde(default)]
    pub is_important: bool,
}

/// Derived figures for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month_name: String,
    pub total_contributions: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Derived all-time figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifetimeSummary {
    pub total_contributions: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Both contribution sums over a set of rooms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContributionTotals {
    pub month_total: f64,
    pub overall_total: f64,
}

/// Inflow vs outflow for a month, as fractions of total flow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashFlowSplit {
    pub inflow_share: f64,
    pub outflow_share: f64,
}

/// Response of `GET /dashboard/?month=YYYY-MM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub rooms: Vec<RoomContribution>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    /// Server-side summary, if the backend sends one. Only used for cross-checking.
    #[serde(default)]
    pub summary: Option<MonthlySummary>,
}

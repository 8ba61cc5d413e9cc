//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the month key type and the summary calculator live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod month;
pub mod summary;

pub use entities::{
    Announcement, CashFlowSplit, ContributionTotals, DashboardResponse, Expense, LifetimeSummary,
    MonthlySummary, RoomContribution,
};
pub use errors::DomainError;
pub use month::MonthKey;

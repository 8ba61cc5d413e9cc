//! Application use cases. Orchestrate domain logic via ports.

pub mod dashboard_service;
pub mod export_service;

pub use dashboard_service::{DashboardService, DashboardView};
pub use export_service::ExportService;

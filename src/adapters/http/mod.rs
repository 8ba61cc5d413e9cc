//! Dashboard API over HTTP.

pub mod dashboard_client;

pub use dashboard_client::HttpDashboardSource;

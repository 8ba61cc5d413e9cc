//! Built-in mock data source for development without a backend.

pub mod mock_source;

pub use mock_source::MockDashboardSource;

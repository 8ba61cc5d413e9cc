//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the dashboard use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the front end until the user quits (or once, when non-interactive).
    async fn run(&self) -> Result<(), DomainError>;
}

//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; figures are derived by DashboardService.

use dotenv::dotenv;
use house_ledger::adapters::http::HttpDashboardSource;
use house_ledger::adapters::mock::MockDashboardSource;
use house_ledger::adapters::persistence::SnapshotFileSource;
use house_ledger::adapters::ui::tui::TuiInputPort;
use house_ledger::ports::{DashboardSource, InputPort};
use house_ledger::shared::config::{AppConfig, SourceKind};
use house_ledger::usecases::{DashboardService, ExportService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let environment = cfg.environment()?;
    let month = cfg.month_or_current()?;

    if cfg.is_interactive() {
        house_ledger::adapters::ui::init_ui();
    }

    // --- Data source (HOUSE_LEDGER_SOURCE: http | mock | file) ---
    let source: Arc<dyn DashboardSource> = match cfg.source_kind()? {
        SourceKind::Http => {
            let base_url = cfg.api_base_url()?;
            let timeout = cfg.request_timeout()?;
            info!(
                env = ?environment,
                url = %base_url,
                timeout_secs = timeout.as_secs(),
                "using dashboard API"
            );
            Arc::new(HttpDashboardSource::new(base_url, timeout)?)
        }
        SourceKind::Mock => {
            info!(env = ?environment, "using built-in mock ledger data");
            Arc::new(MockDashboardSource::new())
        }
        SourceKind::File => {
            let path = cfg.snapshot_path()?;
            info!(path = %path.display(), "using dashboard snapshot file");
            Arc::new(SnapshotFileSource::new(path))
        }
    };

    // --- Services ---
    let dashboard_service = Arc::new(DashboardService::new(source));
    let exports_dir = cfg.exports_dir_or_default();
    info!(path = %exports_dir.display(), "audit exports directory");
    let export_service = Arc::new(ExportService::new(exports_dir));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        dashboard_service,
        export_service,
        month,
        cfg.currency_symbol_or_default(),
        cfg.is_interactive(),
    ));

    // --- Run (dashboard -> menu: month / feed / refresh / export) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

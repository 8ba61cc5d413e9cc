//! Application configuration. Environment, API base URL, data source, paths.

use crate::domain::{DomainError, MonthKey};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the local backend used in development.
pub const DEV_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Default request timeout for the dashboard API.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

/// Build/runtime environment. Selects the default API base URL and data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::Config(format!(
                "unknown environment '{}' (expected development or production)",
                other
            ))),
        }
    }
}

/// Which `DashboardSource` adapter to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    Mock,
    File,
}

impl SourceKind {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "mock" => Ok(Self::Mock),
            "file" => Ok(Self::File),
            other => Err(DomainError::Config(format!(
                "unknown source '{}' (expected http, mock or file)",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// "development" (default) or "production". Read from HOUSE_LEDGER_ENV.
    #[serde(default)]
    pub env: Option<String>,

    /// Dashboard API base URL. Read from HOUSE_LEDGER_API_BASE. Required in production.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Data source: http, mock or file. Read from HOUSE_LEDGER_SOURCE.
    #[serde(default)]
    pub source: Option<String>,

    /// JSON snapshot for the file source. Read from HOUSE_LEDGER_SNAPSHOT_PATH.
    #[serde(default)]
    pub snapshot_path: Option<String>,

    /// Initial month (YYYY-MM). Defaults to the current month. Read from HOUSE_LEDGER_MONTH.
    #[serde(default)]
    pub month: Option<String>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Where audit CSVs are written (default ./exports).
    #[serde(default)]
    pub exports_dir: Option<String>,

    #[serde(default)]
    pub currency_symbol: Option<String>,

    /// false = print the dashboard once and exit.
    #[serde(default)]
    pub interactive: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            Self::env_source(),
            std::env::var("HOUSE_LEDGER_CONFIG").ok(),
        )
    }

    /// HOUSE_LEDGER_* variables; numbers and booleans are parsed from their string form.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("HOUSE_LEDGER").try_parsing(true)
    }

    fn from_sources(
        env: config::Environment,
        file: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder().add_source(env);
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn environment(&self) -> Result<Environment, DomainError> {
        self.env
            .as_deref()
            .map(Environment::parse)
            .unwrap_or(Ok(Environment::Development))
    }

    /// Resolves the API base URL: explicit value wins; development falls back to
    /// [`DEV_API_BASE`]; production without a value is an error.
    pub fn api_base_url(&self) -> Result<String, DomainError> {
        let explicit = self
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        match (explicit, self.environment()?) {
            (Some(url), _) => Ok(url.trim_end_matches('/').to_string()),
            (None, Environment::Development) => Ok(DEV_API_BASE.to_string()),
            (None, Environment::Production) => Err(DomainError::Config(
                "HOUSE_LEDGER_API_BASE must be set in production".into(),
            )),
        }
    }

    /// Defaults to mock data in development and the HTTP API in production.
    pub fn source_kind(&self) -> Result<SourceKind, DomainError> {
        match self.source.as_deref() {
            Some(s) => SourceKind::parse(s),
            None => Ok(match self.environment()? {
                Environment::Development => SourceKind::Mock,
                Environment::Production => SourceKind::Http,
            }),
        }
    }

    pub fn snapshot_path(&self) -> Result<PathBuf, DomainError> {
        self.snapshot_path
            .as_deref()
            .map(PathBuf::from)
            .ok_or_else(|| {
                DomainError::Config("HOUSE_LEDGER_SNAPSHOT_PATH is required for the file source".into())
            })
    }

    /// Configured month, or the current month when unset.
    pub fn month_or_current(&self) -> Result<MonthKey, DomainError> {
        match self.month.as_deref() {
            Some(m) => MonthKey::parse(m),
            None => Ok(MonthKey::current()),
        }
    }

    /// Request timeout for the dashboard API. Zero is rejected: every request would time out.
    pub fn request_timeout(&self) -> Result<Duration, DomainError> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => Err(DomainError::Config(
                "HOUSE_LEDGER_REQUEST_TIMEOUT_SECS must be greater than 0".into(),
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    pub fn exports_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.exports_dir.as_deref().unwrap_or("./exports"))
    }

    pub fn currency_symbol_or_default(&self) -> String {
        self.currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string())
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.unwrap_or(true)
    }
}

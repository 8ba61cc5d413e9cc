//! Implements InputPort. Inquire-based interactive menu around the rendered dashboard.

use crate::adapters::ui::progress::fetch_spinner;
use crate::adapters::ui::render::render_dashboard;
use crate::domain::{DomainError, MonthKey};
use crate::ports::InputPort;
use crate::usecases::{DashboardService, DashboardView, ExportService};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Applies the prompt theme globally (cyan prefix, emerald highlight).
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("❯").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ChangeMonth,
    ToggleFeed { expanded: bool },
    Refresh,
    ExportAudit,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::ChangeMonth => f.write_str("Change month"),
            MenuAction::ToggleFeed { expanded: true } => f.write_str("Compact feed (this month)"),
            MenuAction::ToggleFeed { expanded: false } => f.write_str("Expanded history (all expenses)"),
            MenuAction::Refresh => f.write_str("Refresh"),
            MenuAction::ExportAudit => f.write_str("Export audit (CSV)"),
            MenuAction::Quit => f.write_str("Quit"),
        }
    }
}

/// Esc / Ctrl-C at any prompt means quit, not failure.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Prints the dashboard and loops over an inquire menu.
pub struct TuiInputPort {
    dashboard: Arc<DashboardService>,
    exports: Arc<ExportService>,
    initial_month: MonthKey,
    currency_symbol: String,
    interactive: bool,
}

impl TuiInputPort {
    pub fn new(
        dashboard: Arc<DashboardService>,
        exports: Arc<ExportService>,
        initial_month: MonthKey,
        currency_symbol: String,
        interactive: bool,
    ) -> Self {
        Self {
            dashboard,
            exports,
            initial_month,
            currency_symbol,
            interactive,
        }
    }

    async fn load(&self, month: &MonthKey) -> Result<DashboardView, DomainError> {
        let spinner = fetch_spinner(format!(
            "Loading {} from {} source...",
            month.month_name(),
            self.dashboard.source_name()
        ));
        let result = self.dashboard.load(month).await;
        spinner.finish_and_clear();
        result
    }

    fn show(&self, view: &DashboardView, show_all: bool) {
        println!("{}", render_dashboard(view, show_all, &self.currency_symbol));
    }

    /// Loads and prints; on failure prints the error state and returns None.
    async fn load_and_show(&self, month: &MonthKey, show_all: bool) -> Option<DashboardView> {
        match self.load(month).await {
            Ok(view) => {
                self.show(&view, show_all);
                Some(view)
            }
            Err(e) => {
                warn!(month = %month, error = %e, "dashboard unavailable");
                println!("{}", format!("Could not load {}: {}", month, e).red());
                None
            }
        }
    }

    fn prompt_month(current: &MonthKey) -> Result<Option<MonthKey>, DomainError> {
        let answer = Text::new("Month (YYYY-MM):")
            .with_default(current.as_str())
            .with_validator(|input: &str| {
                Ok(match MonthKey::parse(input) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt();
        match answer {
            Ok(s) => MonthKey::parse(&s).map(Some),
            Err(e) if is_cancel(&e) => Ok(None),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut month = self.initial_month.clone();
        let mut show_all = false;

        if !self.interactive {
            let view = self.load(&month).await?;
            self.show(&view, show_all);
            return Ok(());
        }

        let mut view = self.load_and_show(&month, show_all).await;

        loop {
            let options = vec![
                MenuAction::ChangeMonth,
                MenuAction::ToggleFeed {
                    expanded: show_all,
                },
                MenuAction::Refresh,
                MenuAction::ExportAudit,
                MenuAction::Quit,
            ];
            let action = match Select::new("What next?", options).prompt() {
                Ok(a) => a,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match action {
                MenuAction::ChangeMonth => {
                    if let Some(m) = Self::prompt_month(&month)? {
                        month = m;
                        view = self.load_and_show(&month, show_all).await;
                    }
                }
                MenuAction::ToggleFeed { .. } => {
                    show_all = !show_all;
                    match &view {
                        Some(v) => self.show(v, show_all),
                        None => view = self.load_and_show(&month, show_all).await,
                    }
                }
                MenuAction::Refresh => {
                    view = self.load_and_show(&month, show_all).await;
                }
                MenuAction::ExportAudit => match &view {
                    Some(v) => match self.exports.export_audit(v).await {
                        Ok(path) => {
                            println!("{}", format!("Audit written to {}", path.display()).green())
                        }
                        Err(e) => {
                            warn!(error = %e, "audit export failed");
                            println!("{}", e.to_string().red());
                        }
                    },
                    None => println!("{}", "Nothing to export: dashboard not loaded.".yellow()),
                },
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}

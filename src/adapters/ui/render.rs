//! Plain-text rendering of a dashboard view. Pure: returns the text, prints nothing.

use crate::domain::Expense;
use crate::usecases::DashboardView;
use chrono::NaiveDate;
use std::fmt::Write;

const CENT_PRECISION_LIMIT: f64 = 1e15;

const RULE: &str = "────────────────────────────────────────────────────────";

/// Formats an amount with thousands separators and at most two fraction digits,
/// e.g. `1200` -> `₦1,200`, `-1500.5` -> `-₦1,500.5`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    // NaN and infinities are shown as-is.
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let abs = amount.abs();
    // Past 1e15 an f64 no longer resolves cents; show whole units only.
    let (whole, frac) = if abs < CENT_PRECISION_LIMIT {
        let cents = (abs * 100.0).round() as u64;
        ((cents / 100) as f64, cents % 100)
    } else {
        (abs.round(), 0)
    };

    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && (whole > 0.0 || frac != 0) {
        "-"
    } else {
        ""
    };
    let frac_str = match frac {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };
    format!("{}{}{}{}", sign, symbol, grouped, frac_str)
}

/// "2023-10-05" -> "Oct 05". Anything unparseable is shown as-is.
pub fn format_expense_date(date_added: &str) -> String {
    let day = date_added.get(..10).unwrap_or(date_added);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|_| date_added.to_string())
}

fn percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

/// Renders the whole dashboard. `show_all` selects the expanded expense history.
pub fn render_dashboard(view: &DashboardView, show_all: bool, symbol: &str) -> String {
    let money = |v: f64| format_amount(v, symbol);
    let mut out = String::new();

    // writeln! into a String cannot fail.
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, " House Ledger · {} ({})", view.monthly.month_name, view.month);
    let _ = writeln!(out, "{}", RULE);

    if !view.snapshot.announcements.is_empty() {
        let _ = writeln!(out, "\n Announcements");
        for a in &view.snapshot.announcements {
            let marker = if a.is_important { "[!]" } else { " - " };
            let _ = writeln!(out, "  {} {}", marker, a.message);
        }
    }

    let _ = writeln!(out, "\n Monthly Revenue   {}", money(view.monthly.total_contributions));
    let _ = writeln!(out, " Monthly Spend     {}", money(view.monthly.total_expenses));
    let _ = writeln!(out, " Balance           {}", money(view.monthly.balance));
    let _ = writeln!(
        out,
        " Inflow {} / Outflow {}",
        percent(view.split.inflow_share),
        percent(view.split.outflow_share)
    );

    let _ = writeln!(
        out,
        "\n Rooms ({} of {} paid this month)",
        view.paid_rooms,
        view.snapshot.rooms.len()
    );
    let _ = writeln!(out, "  {:<16} {:>18} {:>18}", "Room", "This month", "Overall");
    for r in &view.snapshot.rooms {
        let this_month = if r.month_total > 0.0 {
            format!("+ {}", money(r.month_total))
        } else {
            "--".to_string()
        };
        let _ = writeln!(
            out,
            "  {:<16} {:>18} {:>18}",
            r.room,
            this_month,
            money(r.overall_total)
        );
    }

    let feed = view.feed(show_all);
    let title = if show_all {
        "Expense history (all months)".to_string()
    } else {
        format!("Expenses in {}", view.monthly.month_name)
    };
    let _ = writeln!(out, "\n {}", title);
    if feed.is_empty() {
        let _ = writeln!(out, "  (no expenses)");
    }
    for e in feed {
        let _ = writeln!(out, "{}", expense_line(e, symbol));
    }

    let _ = writeln!(out, "\n Lifetime");
    let _ = writeln!(out, "  Total inflow      {}", money(view.lifetime.total_contributions));
    let _ = writeln!(out, "  Total burn        {}", money(view.lifetime.total_expenses));
    let _ = writeln!(
        out,
        "  Liquid capital    {}",
        format_amount(view.lifetime.balance.round(), symbol)
    );
    let _ = writeln!(out, "{}", RULE);
    out
}

fn expense_line(e: &Expense, symbol: &str) -> String {
    format!(
        "  {:<7} {:<34} {:>14}",
        format_expense_date(&e.date_added),
        e.description,
        format_amount(e.amount, symbol)
    )
}

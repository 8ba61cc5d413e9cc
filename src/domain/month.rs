//! Month key value type ("YYYY-MM").

use crate::domain::DomainError;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Validated calendar month key, e.g. `2023-10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        // Exactly YYYY-MM; chrono alone would accept "2023-1".
        let shape_ok = s.len() == 7
            && s.as_bytes()[4] == b'-'
            && s
                .bytes()
                .enumerate()
                .all(|(i, b)| i == 4 || b.is_ascii_digit());
        if !shape_ok || Self::first_day_of(s).is_none() {
            return Err(DomainError::InvalidMonth(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self(format!("{:04}-{:02}", today.year(), today.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Long month name and year, e.g. "October 2023".
    pub fn month_name(&self) -> String {
        Self::first_day_of(&self.0)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.0.clone())
    }

    fn first_day_of(key: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d").ok()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

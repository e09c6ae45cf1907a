//! Analytics lookback windows.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::error::AppError;

/// How far back an analytics count looks.
///
/// The set is closed: parsing anything other than `all`, `24h` or `7d` fails
/// with [`AppError::InvalidWindow`] instead of widening to `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookbackWindow {
    All,
    Last24Hours,
    Last7Days,
}

impl LookbackWindow {
    pub const ALL: [LookbackWindow; 3] = [
        LookbackWindow::All,
        LookbackWindow::Last24Hours,
        LookbackWindow::Last7Days,
    ];

    /// Path segment form (`all`, `24h`, `7d`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackWindow::All => "all",
            LookbackWindow::Last24Hours => "24h",
            LookbackWindow::Last7Days => "7d",
        }
    }

    /// Lower bound relative to the datastore clock, `None` for unbounded.
    pub fn lookback(&self) -> Option<Duration> {
        match self {
            LookbackWindow::All => None,
            LookbackWindow::Last24Hours => Some(Duration::hours(24)),
            LookbackWindow::Last7Days => Some(Duration::days(7)),
        }
    }

    /// Lookback in whole seconds, bound as a query parameter.
    pub fn lookback_seconds(&self) -> Option<i64> {
        self.lookback().map(|d| d.num_seconds())
    }

    /// Suffix used in the analytics response line.
    pub fn phrase(&self) -> &'static str {
        match self {
            LookbackWindow::All => "for all time",
            LookbackWindow::Last24Hours => "in 24 HOURS",
            LookbackWindow::Last7Days => "in 7 DAYS",
        }
    }
}

impl FromStr for LookbackWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(LookbackWindow::All),
            "24h" => Ok(LookbackWindow::Last24Hours),
            "7d" => Ok(LookbackWindow::Last7Days),
            other => Err(AppError::invalid_window(other)),
        }
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

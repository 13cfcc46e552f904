//! Reporting period and chart interval definitions.
//!
//! [`Period`] selects the fiscal period of fundamental endpoints and
//! [`Interval`] selects the bar size of intraday chart endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting period for financial statements and metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Every quarter (10-Q filings).
    Quarter,
    /// First fiscal quarter only.
    Q1,
    /// Second fiscal quarter only.
    Q2,
    /// Third fiscal quarter only.
    Q3,
    /// Fourth fiscal quarter only.
    Q4,
    /// Full fiscal year as reported.
    FiscalYear,
}

impl Period {
    /// Returns the query parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::FiscalYear => "FY",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar size for intraday chart endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One-minute bars.
    OneMinute,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
    /// Thirty-minute bars.
    ThirtyMinutes,
    /// Hourly bars.
    OneHour,
    /// Four-hour bars.
    FourHours,
}

impl Interval {
    /// Returns the path segment used by the chart endpoints.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::OneHour => "1hour",
            Self::FourHours => "4hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_values() {
        assert_eq!(Period::default().as_str(), "annual");
        assert_eq!(Period::Quarter.to_string(), "quarter");
        assert_eq!(Period::FiscalYear.as_str(), "FY");
    }

    #[test]
    fn test_interval_path_segments() {
        assert_eq!(Interval::OneMinute.as_str(), "1min");
        assert_eq!(Interval::FourHours.to_string(), "4hour");
    }
}

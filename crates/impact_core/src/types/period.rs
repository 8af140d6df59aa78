//! Period types and normalisation to a day count.
//!
//! Reported windows arrive as a label (`"days"`, `"weeks"`, `"months"`) plus a
//! count of periods. The estimator works in days throughout, so every window is
//! normalised once via [`PeriodType::to_days`].
//!
//! # Examples
//!
//! ```
//! use impact_core::types::period::{normalize_to_days, PeriodType};
//!
//! assert_eq!(normalize_to_days("months", 1.0), 30.0);
//! assert_eq!(normalize_to_days("Weeks", 1.5), 10.5);
//! assert_eq!(normalize_to_days("fortnights", 5.0), 5.0);
//!
//! assert_eq!(PeriodType::parse_lenient("monthly"), PeriodType::Months);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EstimatorError;

/// Unit of a reported time window.
///
/// Months are a fixed 30 days; there is no calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// One day per period
    #[default]
    Days,
    /// Seven days per period
    Weeks,
    /// Thirty days per period
    Months,
}

impl PeriodType {
    /// All period types, shortest first.
    pub const ALL: [PeriodType; 3] = [PeriodType::Days, PeriodType::Weeks, PeriodType::Months];

    /// Parses a label by case-insensitive substring match.
    ///
    /// A label containing "month" is [`PeriodType::Months`], otherwise one
    /// containing "week" is [`PeriodType::Weeks`]. Everything else, including
    /// unrecognised labels and the empty string, falls through to
    /// [`PeriodType::Days`].
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_core::types::PeriodType;
    ///
    /// assert_eq!(PeriodType::parse_lenient("MONTHS"), PeriodType::Months);
    /// assert_eq!(PeriodType::parse_lenient("week"), PeriodType::Weeks);
    /// assert_eq!(PeriodType::parse_lenient("days"), PeriodType::Days);
    /// assert_eq!(PeriodType::parse_lenient("quarters"), PeriodType::Days);
    /// ```
    pub fn parse_lenient(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("month") {
            PeriodType::Months
        } else if lower.contains("week") {
            PeriodType::Weeks
        } else {
            if !lower.contains("day") {
                tracing::debug!(period_type = %label, "unrecognised period type, treating as days");
            }
            PeriodType::Days
        }
    }

    /// Number of days in one period.
    pub fn days_per_period(&self) -> i64 {
        match self {
            PeriodType::Days => 1,
            PeriodType::Weeks => 7,
            PeriodType::Months => 30,
        }
    }

    /// Converts a count of periods to days.
    ///
    /// Fractional, zero and negative counts pass straight through the
    /// multiplication, so half a week is 3.5 days.
    pub fn to_days(&self, count: f64) -> f64 {
        count * self.days_per_period() as f64
    }

    /// Canonical lowercase label.
    pub fn name(&self) -> &'static str {
        match self {
            PeriodType::Days => "days",
            PeriodType::Weeks => "weeks",
            PeriodType::Months => "months",
        }
    }
}

impl FromStr for PeriodType {
    type Err = EstimatorError;

    /// Strict parse: the same substring rules as [`PeriodType::parse_lenient`],
    /// but labels that mention no known unit are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower.contains("month") || lower.contains("week") || lower.contains("day") {
            Ok(PeriodType::parse_lenient(s))
        } else {
            Err(EstimatorError::UnknownPeriodType(s.to_string()))
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Normalises `count` periods of the labelled type to days.
///
/// Uses the lenient label rules, so unrecognised labels count as days.
pub fn normalize_to_days(period_type: &str, count: f64) -> f64 {
    PeriodType::parse_lenient(period_type).to_days(count)
}

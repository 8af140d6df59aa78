//! Scenario selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{NORMAL_INFECTION_MULTIPLIER, SEVERE_INFECTION_MULTIPLIER};

/// Projection scenario.
///
/// The two scenarios differ only in how many true infections are assumed per
/// reported case.
///
/// # Examples
///
/// ```
/// use impact_core::Scenario;
///
/// assert_eq!(Scenario::Normal.infection_multiplier(), 10);
/// assert_eq!(Scenario::Severe.infection_multiplier(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Ten true infections per reported case
    Normal,
    /// Fifty true infections per reported case
    Severe,
}

impl Scenario {
    /// Both scenarios in output order.
    pub const ALL: [Scenario; 2] = [Scenario::Normal, Scenario::Severe];

    /// Unreported-to-reported case ratio.
    pub fn infection_multiplier(&self) -> i64 {
        match self {
            Scenario::Normal => NORMAL_INFECTION_MULTIPLIER,
            Scenario::Severe => SEVERE_INFECTION_MULTIPLIER,
        }
    }

    /// Lowercase label.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Severe => "severe",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

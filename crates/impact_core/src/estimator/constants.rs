//! Policy parameters of the estimator.
//!
//! These are fixed assumptions, not fitted to data.

/// Infections double once every this many days.
pub const DOUBLING_RATE_DAYS: i64 = 3;

/// Share of infections that need hospitalisation.
pub const SEVERE_CASE_FRACTION: f64 = 0.15;

/// Share of total beds assumed free for outbreak patients.
pub const BED_AVAILABILITY_FRACTION: f64 = 0.35;

/// Share of infections that need intensive care.
pub const ICU_FRACTION: f64 = 0.05;

/// Share of infections that need ventilation.
pub const VENTILATOR_FRACTION: f64 = 0.02;

/// Unreported-to-reported case ratio in the normal scenario.
pub const NORMAL_INFECTION_MULTIPLIER: i64 = 10;

/// Unreported-to-reported case ratio in the severe scenario.
pub const SEVERE_INFECTION_MULTIPLIER: i64 = 50;

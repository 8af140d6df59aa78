//! Records, period types, and errors shared by the estimator.
//!
//! This module provides:
//! - `input`: The externally supplied input record and its region economics
//! - `period`: Period types (days, weeks, months) and normalisation to days
//! - `projection`: Per-scenario output record and the combined estimate
//! - `quantity`: Numeric input values that may be whole or fractional
//! - `error`: Structured error type for estimation and input decoding
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`InputRecord`], [`Region`] from `input`
//! - [`PeriodType`], [`normalize_to_days`] from `period`
//! - [`ImpactProjection`], [`ImpactEstimate`] from `projection`
//! - [`Quantity`] from `quantity`
//! - [`EstimatorError`], [`Result`] from `error`

pub mod error;
pub mod input;
pub mod period;
pub mod projection;
pub mod quantity;

pub use error::{EstimatorError, Result};
pub use input::{InputRecord, Region};
pub use period::{normalize_to_days, PeriodType};
pub use projection::{ImpactEstimate, ImpactProjection};
pub use quantity::Quantity;

//! Estimation formula chain.
//!
//! This module provides:
//! - `constants`: Fixed policy parameters (doubling rate, case fractions)
//! - `scenario`: The `Normal` / `Severe` selector and its infection multiplier
//! - `impact`: Single-scenario estimation ([`estimate`], [`estimate_traced`])
//! - `orchestrator`: Dual-scenario run assembling the combined result ([`run`])

pub mod constants;
pub mod impact;
pub mod orchestrator;
pub mod scenario;

pub use impact::{estimate, estimate_traced, ProjectionTrace};
pub use orchestrator::run;
pub use scenario::Scenario;

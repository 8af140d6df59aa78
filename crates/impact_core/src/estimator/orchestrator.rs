//! Dual-scenario orchestration.

use tracing::instrument;

use super::impact::estimate;
use super::scenario::Scenario;
use crate::types::{ImpactEstimate, InputRecord, Result};

/// Runs the normal and severe projections over the same input.
///
/// The input is borrowed for both runs and echoed unchanged as `data`.
/// Fails with the first scenario's error if either projection fails.
///
/// # Examples
///
/// ```
/// use impact_core::demo::demo_input;
/// use impact_core::run;
///
/// let input = demo_input().with_window("weeks", 3).with_reported_cases(419);
/// let estimate = run(&input).unwrap();
///
/// assert_eq!(estimate.impact.hospital_beds_by_requested_time, 402_766);
/// assert_eq!(estimate.severe_impact.hospital_beds_by_requested_time, 80_974);
/// ```
#[instrument(level = "debug", skip_all, fields(
    period_type = %input.period_type,
    time_to_elapse = %input.time_to_elapse,
    reported_cases = %input.reported_cases,
))]
pub fn run(input: &InputRecord) -> Result<ImpactEstimate> {
    let impact = estimate(input, Scenario::Normal)?;
    let severe_impact = estimate(input, Scenario::Severe)?;

    tracing::debug!(
        infections = impact.infections_by_requested_time,
        severe_infections = severe_impact.infections_by_requested_time,
        "dual-scenario estimate complete"
    );

    Ok(ImpactEstimate {
        data: input.clone(),
        impact,
        severe_impact,
    })
}

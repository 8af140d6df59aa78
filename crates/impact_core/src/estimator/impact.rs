//! Single-scenario impact estimation.
//!
//! The chain runs in a fixed order, each stage reading only raw inputs or
//! earlier stages:
//!
//! 1. `currentlyInfected = trunc(reportedCases * multiplier)`
//! 2. `days = timeToElapse` normalised to days, possibly fractional
//! 3. `doublingPeriods = trunc(days / DOUBLING_RATE_DAYS)`
//! 4. `infectionFactor = 2 ^ doublingPeriods`
//! 5. `infectionsByRequestedTime = trunc(currentlyInfected * infectionFactor)`
//! 6. `severeCasesByRequestedTime = trunc(infections * SEVERE_CASE_FRACTION)`
//! 7. `availableBeds = trunc(totalHospitalBeds * BED_AVAILABILITY_FRACTION)`
//! 8. `hospitalBedsByRequestedTime = availableBeds - severeCases`
//! 9. `casesForICUByRequestedTime = trunc(infections * ICU_FRACTION)`
//! 10. `casesForVentilatorsByRequestedTime = trunc(infections * VENTILATOR_FRACTION)`
//! 11. `dollarsInFlight = trunc(infections * income * earners / days)`
//!
//! Every `trunc` drops the fractional part, rounding toward zero.

use super::constants::{
    BED_AVAILABILITY_FRACTION, DOUBLING_RATE_DAYS, ICU_FRACTION, SEVERE_CASE_FRACTION,
    VENTILATOR_FRACTION,
};
use super::scenario::Scenario;
use crate::types::{EstimatorError, ImpactProjection, InputRecord, Result};

/// Intermediate values of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionTrace {
    /// Scenario the run used
    pub scenario: Scenario,
    /// Projection window in days
    pub days: f64,
    /// Whole doubling periods within the window
    pub doubling_periods: i64,
    /// Growth factor `2 ^ doubling_periods`
    pub infection_factor: f64,
    /// Beds assumed free for outbreak patients
    pub available_beds: i64,
}

/// Drops the fractional part, rejecting NaN and infinities.
///
/// Values beyond the `i64` range saturate.
fn truncate(value: f64, metric: &'static str) -> Result<i64> {
    if !value.is_finite() {
        return Err(EstimatorError::NonFiniteValue { metric });
    }
    Ok(value.trunc() as i64)
}

/// Estimates the impact of the outbreak under one scenario.
///
/// # Errors
///
/// - [`EstimatorError::ZeroDayWindow`] when the window normalises to zero days
/// - [`EstimatorError::NonFiniteValue`] when a stage overflows to infinity or
///   the region economics are not finite
///
/// # Examples
///
/// ```
/// use impact_core::types::{InputRecord, Region};
/// use impact_core::{estimate, Scenario};
///
/// let input = InputRecord::new("months", 1, 300, 1_380_614, Region::new(5, 0.71));
///
/// let normal = estimate(&input, Scenario::Normal).unwrap();
/// assert_eq!(normal.infections_by_requested_time, 3_072_000);
///
/// let severe = estimate(&input, Scenario::Severe).unwrap();
/// assert_eq!(severe.infections_by_requested_time, 15_360_000);
/// ```
pub fn estimate(input: &InputRecord, scenario: Scenario) -> Result<ImpactProjection> {
    estimate_traced(input, scenario).map(|(projection, _)| projection)
}

/// Like [`estimate`], also returning the intermediate values.
pub fn estimate_traced(
    input: &InputRecord,
    scenario: Scenario,
) -> Result<(ImpactProjection, ProjectionTrace)> {
    let currently_infected = truncate(
        input.reported_cases.value() * scenario.infection_multiplier() as f64,
        "currentlyInfected",
    )?;

    let days = input.days();
    let doubling_periods = truncate(
        days / DOUBLING_RATE_DAYS as f64,
        "infectionsByRequestedTime",
    )?;
    let infection_factor = (doubling_periods as f64).exp2();

    let infections_by_requested_time = truncate(
        currently_infected as f64 * infection_factor,
        "infectionsByRequestedTime",
    )?;
    let infections = infections_by_requested_time as f64;

    let severe_cases_by_requested_time =
        truncate(infections * SEVERE_CASE_FRACTION, "severeCasesByRequestedTime")?;

    let available_beds = truncate(
        input.total_hospital_beds.value() * BED_AVAILABILITY_FRACTION,
        "hospitalBedsByRequestedTime",
    )?;
    let hospital_beds_by_requested_time =
        available_beds.saturating_sub(severe_cases_by_requested_time);

    let cases_for_icu_by_requested_time =
        truncate(infections * ICU_FRACTION, "casesForICUByRequestedTime")?;
    let cases_for_ventilators_by_requested_time = truncate(
        infections * VENTILATOR_FRACTION,
        "casesForVentilatorsByRequestedTime",
    )?;

    if days == 0.0 {
        return Err(EstimatorError::ZeroDayWindow {
            period_type: input.period_type.clone(),
            time_to_elapse: input.time_to_elapse,
        });
    }
    let dollars_in_flight = truncate(
        infections
            * input.region.avg_daily_income_in_usd.value()
            * input.region.avg_daily_income_population.value()
            / days,
        "dollarsInFlight",
    )?;

    let trace = ProjectionTrace {
        scenario,
        days,
        doubling_periods,
        infection_factor,
        available_beds,
    };
    tracing::trace!(
        %scenario,
        days,
        doubling_periods,
        infection_factor,
        available_beds,
        "projection stages computed"
    );

    let projection = ImpactProjection {
        currently_infected,
        infections_by_requested_time,
        severe_cases_by_requested_time,
        hospital_beds_by_requested_time,
        cases_for_icu_by_requested_time,
        cases_for_ventilators_by_requested_time,
        dollars_in_flight,
    };

    Ok((projection, trace))
}

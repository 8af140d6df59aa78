//! Input record supplied by the caller.
//!
//! Field names follow the JSON wire names (`reportedCases`, `periodType`, ...).
//! Fields the estimator does not read, such as `population` or `region.name`,
//! are kept in flattened pass-through maps, and numbers keep the form they
//! arrived in, so the record can be echoed back unchanged in the combined
//! result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{EstimatorError, Result};
use super::period::PeriodType;
use super::quantity::Quantity;

/// Wire names of the fields every record must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "region",
    "periodType",
    "timeToElapse",
    "reportedCases",
    "totalHospitalBeds",
];

/// Wire names of the fields every `region` must carry.
pub const REQUIRED_REGION_FIELDS: [&str; 2] = ["avgDailyIncomeInUSD", "avgDailyIncomePopulation"];

/// Economic profile of the affected region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Average daily income per earner, in USD
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: Quantity,
    /// Income-earning share of the population
    pub avg_daily_income_population: Quantity,
    /// Fields not used by the estimator (e.g. `name`, `avgAge`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Region {
    /// Creates a region with no pass-through fields.
    pub fn new(
        avg_daily_income_in_usd: impl Into<Quantity>,
        avg_daily_income_population: impl Into<Quantity>,
    ) -> Self {
        Self {
            avg_daily_income_in_usd: avg_daily_income_in_usd.into(),
            avg_daily_income_population: avg_daily_income_population.into(),
            extra: Map::new(),
        }
    }

    /// Region name, when supplied.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Reported outbreak statistics for one region.
///
/// The record is never modified by the estimator. Counts may be fractional;
/// the estimator truncates where it needs whole numbers.
///
/// # Examples
///
/// ```
/// use impact_core::types::{InputRecord, PeriodType, Region};
///
/// let input = InputRecord::new("weeks", 3, 419, 1_380_614, Region::new(5, 0.71));
/// assert_eq!(input.period(), PeriodType::Weeks);
/// assert_eq!(input.days(), 21.0);
///
/// let input = input.with_window("weeks", 1.5);
/// assert_eq!(input.days(), 10.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    /// Regional economics
    pub region: Region,
    /// Period label as supplied, e.g. `"days"`
    pub period_type: String,
    /// Number of periods to project over
    pub time_to_elapse: Quantity,
    /// Confirmed cases at time zero
    pub reported_cases: Quantity,
    /// Total hospital bed capacity of the region
    pub total_hospital_beds: Quantity,
    /// Fields not used by the estimator (e.g. `population`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InputRecord {
    /// Creates a record with no pass-through fields.
    pub fn new(
        period_type: impl Into<String>,
        time_to_elapse: impl Into<Quantity>,
        reported_cases: impl Into<Quantity>,
        total_hospital_beds: impl Into<Quantity>,
        region: Region,
    ) -> Self {
        Self {
            region,
            period_type: period_type.into(),
            time_to_elapse: time_to_elapse.into(),
            reported_cases: reported_cases.into(),
            total_hospital_beds: total_hospital_beds.into(),
            extra: Map::new(),
        }
    }

    /// Decodes a record from JSON text.
    ///
    /// Missing or mistyped fields surface as
    /// [`EstimatorError::InvalidInput`] carrying the dotted path of the
    /// field, e.g. `reportedCases` or `region.avgDailyIncomeInUSD`.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decodes a record from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Decodes a record from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        check_required(&value)?;
        Ok(serde_path_to_error::deserialize(value)?)
    }

    /// Period type parsed with the lenient substring rules.
    pub fn period(&self) -> PeriodType {
        PeriodType::parse_lenient(&self.period_type)
    }

    /// Projection window normalised to days.
    pub fn days(&self) -> f64 {
        self.period().to_days(self.time_to_elapse.value())
    }

    /// Returns a copy with a different reported case count.
    pub fn with_reported_cases(mut self, reported_cases: impl Into<Quantity>) -> Self {
        self.reported_cases = reported_cases.into();
        self
    }

    /// Returns a copy with a different projection window.
    pub fn with_window(
        mut self,
        period_type: impl Into<String>,
        time_to_elapse: impl Into<Quantity>,
    ) -> Self {
        self.period_type = period_type.into();
        self.time_to_elapse = time_to_elapse.into();
        self
    }

    /// Returns a copy with a different bed capacity.
    pub fn with_total_hospital_beds(mut self, total_hospital_beds: impl Into<Quantity>) -> Self {
        self.total_hospital_beds = total_hospital_beds.into();
        self
    }
}

// Serde reports a missing field without its path, so presence is checked
// before decoding.
fn check_required(value: &Value) -> Result<()> {
    let record = value
        .as_object()
        .ok_or_else(|| EstimatorError::invalid_input("expected a JSON object"))?;

    if let Some(name) = REQUIRED_FIELDS.iter().find(|name| !record.contains_key(**name)) {
        return Err(EstimatorError::missing_field(*name));
    }

    if let Some(region) = record.get("region").and_then(Value::as_object) {
        if let Some(name) = REQUIRED_REGION_FIELDS
            .iter()
            .find(|name| !region.contains_key(**name))
        {
            return Err(EstimatorError::missing_field(format!("region.{}", name)));
        }
    }

    Ok(())
}

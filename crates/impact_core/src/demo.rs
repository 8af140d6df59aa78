//! Demo dataset.
//!
//! A single region profile used by examples, the CLI `demo` command, and
//! tests. Every call builds a fresh value, so callers may adjust it freely
//! with the `InputRecord::with_*` builders.

use serde_json::{json, Map, Value};

use crate::types::{InputRecord, Quantity, Region};

/// Demo region name.
pub const DEMO_REGION_NAME: &str = "Africa";

/// Builds the demo input record.
///
/// # Examples
///
/// ```
/// use impact_core::demo::demo_input;
///
/// let input = demo_input();
/// assert_eq!(input.reported_cases.value(), 674.0);
/// assert_eq!(input.region.name(), Some("Africa"));
/// ```
pub fn demo_input() -> InputRecord {
    let mut region_extra = Map::new();
    region_extra.insert("name".to_string(), Value::from(DEMO_REGION_NAME));
    region_extra.insert("avgAge".to_string(), json!(19.7));

    let mut extra = Map::new();
    extra.insert("population".to_string(), json!(66_622_705));

    InputRecord {
        region: Region {
            avg_daily_income_in_usd: Quantity::Integer(5),
            avg_daily_income_population: Quantity::Real(0.71),
            extra: region_extra,
        },
        period_type: "days".to_string(),
        time_to_elapse: Quantity::Integer(58),
        reported_cases: Quantity::Integer(674),
        total_hospital_beds: Quantity::Integer(1_380_614),
        extra,
    }
}

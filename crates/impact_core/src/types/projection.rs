//! Output records.

use serde::{Deserialize, Serialize};

use super::input::InputRecord;
#[cfg(feature = "xml")]
use super::error::{EstimatorError, Result};

/// Projected impact under one scenario.
///
/// Every field is a truncated integer. `hospital_beds_by_requested_time` is
/// negative when severe cases exceed the available beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactProjection {
    /// Estimated true infections today
    pub currently_infected: i64,
    /// Estimated infections at the end of the window
    pub infections_by_requested_time: i64,
    /// Infections requiring hospitalisation
    pub severe_cases_by_requested_time: i64,
    /// Free beds left after severe cases (negative means a deficit)
    pub hospital_beds_by_requested_time: i64,
    /// Infections requiring intensive care
    #[serde(rename = "casesForICUByRequestedTime")]
    pub cases_for_icu_by_requested_time: i64,
    /// Infections requiring ventilation
    pub cases_for_ventilators_by_requested_time: i64,
    /// Daily economic loss in USD
    pub dollars_in_flight: i64,
}

impl ImpactProjection {
    /// Metric names in output order, paired with their values.
    ///
    /// # Examples
    ///
    /// ```
    /// use impact_core::types::ImpactProjection;
    ///
    /// let rows = ImpactProjection::default().metrics();
    /// assert_eq!(rows.len(), 7);
    /// assert_eq!(rows[0].0, "currentlyInfected");
    /// ```
    pub fn metrics(&self) -> [(&'static str, i64); 7] {
        [
            ("currentlyInfected", self.currently_infected),
            ("infectionsByRequestedTime", self.infections_by_requested_time),
            ("severeCasesByRequestedTime", self.severe_cases_by_requested_time),
            ("hospitalBedsByRequestedTime", self.hospital_beds_by_requested_time),
            ("casesForICUByRequestedTime", self.cases_for_icu_by_requested_time),
            (
                "casesForVentilatorsByRequestedTime",
                self.cases_for_ventilators_by_requested_time,
            ),
            ("dollarsInFlight", self.dollars_in_flight),
        ]
    }

    /// Whether severe cases outstrip the available beds.
    pub fn has_bed_deficit(&self) -> bool {
        self.hospital_beds_by_requested_time < 0
    }
}

/// Combined result of the dual-scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    /// Input record, echoed unchanged
    pub data: InputRecord,
    /// Normal scenario
    pub impact: ImpactProjection,
    /// Severe scenario
    pub severe_impact: ImpactProjection,
}

#[cfg(feature = "xml")]
impl ImpactEstimate {
    /// XML root element name.
    pub const XML_ROOT: &'static str = "estimate";

    /// Renders the estimate as an XML document rooted at `<estimate>`.
    ///
    /// Element names are the JSON field names. Pass-through input fields
    /// become child elements of `<data>` or `<region>`.
    pub fn to_xml(&self) -> Result<String> {
        quick_xml::se::to_string_with_root(Self::XML_ROOT, self)
            .map_err(|e| EstimatorError::Serialisation(e.to_string()))
    }
}

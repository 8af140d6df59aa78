//! Error types for structured error handling.
//!
//! Every failure in the kernel surfaces as an [`EstimatorError`]; nothing is
//! swallowed or replaced by a sentinel value.

use thiserror::Error;

use super::quantity::Quantity;

/// Categorised estimation errors.
///
/// # Variants
/// - `InvalidInput`: Input record could not be decoded (missing or mistyped field)
/// - `UnknownPeriodType`: Strict period parsing met an unrecognised label
/// - `ZeroDayWindow`: The normalised day count is zero, so the daily loss is undefined
/// - `NonFiniteValue`: A floating-point stage produced NaN or infinity
/// - `Serialisation`: The result could not be rendered (XML view)
///
/// # Examples
/// ```
/// use impact_core::types::EstimatorError;
///
/// let err = EstimatorError::missing_field("reportedCases");
/// assert_eq!(err.field(), Some("reportedCases"));
/// assert_eq!(format!("{}", err), "Invalid input: missing field `reportedCases`");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    /// Input record could not be decoded.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Dotted path of the offending field, e.g. `region.avgDailyIncomeInUSD`
        field: Option<String>,
        /// Decoder message
        message: String,
    },

    /// Unrecognised period label (strict parsing only).
    #[error("Unknown period type: {0}. Must contain one of: day, week, month")]
    UnknownPeriodType(String),

    /// Normalised day count is zero.
    #[error("Cannot compute dollarsInFlight over a zero-day window ({time_to_elapse} {period_type})")]
    ZeroDayWindow {
        /// Period label as supplied
        period_type: String,
        /// Period count as supplied
        time_to_elapse: Quantity,
    },

    /// Floating-point stage produced NaN or infinity.
    #[error("Non-finite value computed for {metric}")]
    NonFiniteValue {
        /// Output metric being computed
        metric: &'static str,
    },

    /// Result could not be rendered to a wire format.
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl EstimatorError {
    /// Create an invalid input error without a known field
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: None,
            message: msg.into(),
        }
    }

    /// Create an invalid input error for a missing field
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::InvalidInput {
            message: format!("missing field `{}`", field),
            field: Some(field),
        }
    }

    /// Field name attached to an input error, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Whether the error stems from the shape of the input rather than its values
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnknownPeriodType(_)
        )
    }

    /// Stable machine-readable code used by the service layer
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::UnknownPeriodType(_) => "unknown_period_type",
            Self::ZeroDayWindow { .. } => "zero_day_window",
            Self::NonFiniteValue { .. } => "non_finite_value",
            Self::Serialisation(_) => "serialisation",
        }
    }
}

impl From<serde_json::Error> for EstimatorError {
    /// Maps a syntax error, where no field can be named.
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for EstimatorError {
    /// Maps a decoding failure, naming the field at which it happened.
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field = err
            .path()
            .iter()
            .next()
            .is_some()
            .then(|| err.path().to_string());

        Self::InvalidInput {
            field,
            message: err.to_string(),
        }
    }
}

/// Result alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::invalid_input("expected an object");
        assert_eq!(err.to_string(), "Invalid input: expected an object");

        let err = EstimatorError::UnknownPeriodType("fortnights".to_string());
        assert!(err.to_string().contains("fortnights"));

        let err = EstimatorError::ZeroDayWindow {
            period_type: "weeks".to_string(),
            time_to_elapse: Quantity::from(0),
        };
        assert!(err.to_string().contains("zero-day window"));
        assert!(err.to_string().contains("0 weeks"));

        let err = EstimatorError::NonFiniteValue {
            metric: "dollarsInFlight",
        };
        assert_eq!(err.to_string(), "Non-finite value computed for dollarsInFlight");
    }

    #[test]
    fn test_syntax_error_has_no_field() {
        let err: EstimatorError = serde_json::from_str::<serde_json::Value>("{")
            .map(|_| ())
            .unwrap_err()
            .into();
        assert_eq!(err.field(), None);
        assert!(err.is_input_error());
        assert_eq!(err.code(), "invalid_input");
    }

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Cases {
        #[serde(rename = "reportedCases")]
        reported_cases: Quantity,
    }

    #[test]
    fn test_mistyped_field_is_named_by_path() {
        let value = serde_json::json!({"reportedCases": "ten"});
        let err: EstimatorError = serde_path_to_error::deserialize::<_, Cases>(value)
            .unwrap_err()
            .into();

        assert_eq!(err.field(), Some("reportedCases"));
        assert!(err.to_string().contains("expected a number"));
    }

    #[test]
    fn test_root_level_failure_has_no_field() {
        let value = serde_json::json!("not a record");
        let err: EstimatorError = serde_path_to_error::deserialize::<_, Cases>(value)
            .unwrap_err()
            .into();

        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_missing_field_helper() {
        let err = EstimatorError::missing_field("region.avgDailyIncomeInUSD");
        assert_eq!(err.field(), Some("region.avgDailyIncomeInUSD"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            EstimatorError::ZeroDayWindow {
                period_type: "days".to_string(),
                time_to_elapse: Quantity::from(0),
            }
            .code(),
            "zero_day_window"
        );
        assert!(!EstimatorError::NonFiniteValue { metric: "x" }.is_input_error());
        assert!(EstimatorError::UnknownPeriodType("x".to_string()).is_input_error());
    }
}

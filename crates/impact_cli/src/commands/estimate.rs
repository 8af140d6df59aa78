//! Estimate command implementation
//!
//! Reads one input record as JSON from a file or stdin and prints the
//! combined normal/severe estimate.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use impact_core::InputRecord;
use tracing::info;

use crate::config::OutputFormat;
use crate::render::render;
use crate::{CliError, Result};

/// Run the estimate command
///
/// `input` of `None` or `-` reads from stdin.
pub fn run(input: Option<&Path>, format: OutputFormat, pretty: bool) -> Result<()> {
    let output = match input {
        Some(path) if path != Path::new("-") => {
            info!("Reading input from {}", path.display());
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            estimate_from_reader(BufReader::new(File::open(path)?), format, pretty)?
        }
        _ => {
            info!("Reading input from stdin");
            estimate_from_reader(std::io::stdin().lock(), format, pretty)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Decode, estimate and render one input record
pub fn estimate_from_reader<R: Read>(
    mut reader: R,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    let input = InputRecord::from_json(&body)?;
    let estimate = impact_core::run(&input)?;

    info!(
        reported_cases = %input.reported_cases,
        days = input.days(),
        %format,
        "Estimate complete"
    );

    render(&estimate, format, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_core::EstimatorError;
    use std::io::Write;

    const INPUT: &str = r#"{
        "region": {
            "name": "Africa",
            "avgAge": 19.7,
            "avgDailyIncomeInUSD": 5,
            "avgDailyIncomePopulation": 0.71
        },
        "periodType": "weeks",
        "timeToElapse": 3,
        "reportedCases": 419,
        "population": 66622705,
        "totalHospitalBeds": 1380614
    }"#;

    #[test]
    fn test_estimate_from_reader_json() {
        let output = estimate_from_reader(INPUT.as_bytes(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["impact"]["hospitalBedsByRequestedTime"], 402_766);
        assert_eq!(value["severeImpact"]["hospitalBedsByRequestedTime"], 80_974);
        assert_eq!(value["data"]["population"], 66_622_705);
    }

    #[test]
    fn test_estimate_from_reader_missing_field() {
        let err = estimate_from_reader(r#"{"region": {}}"#.as_bytes(), OutputFormat::Json, false)
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Estimator(EstimatorError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_estimate_from_reader_zero_window() {
        let input = INPUT.replace("\"timeToElapse\": 3", "\"timeToElapse\": 0");
        let err = estimate_from_reader(input.as_bytes(), OutputFormat::Table, false).unwrap_err();

        assert!(matches!(
            err,
            CliError::Estimator(EstimatorError::ZeroDayWindow { .. })
        ));
    }

    #[test]
    fn test_run_with_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INPUT.as_bytes()).unwrap();

        assert!(run(Some(file.path()), OutputFormat::Table, false).is_ok());
    }

    #[test]
    fn test_run_missing_file() {
        let err = run(
            Some(Path::new("/nonexistent/input.json")),
            OutputFormat::Json,
            false,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}

//! Demo command: runs the estimator on the built-in demo dataset.

use impact_core::demo::demo_input;
use tracing::info;

use crate::config::OutputFormat;
use crate::render::render;
use crate::Result;

/// Runs the estimator on the demo region and prints the result.
pub fn run(format: OutputFormat, pretty: bool) -> Result<()> {
    println!("{}", render_demo(format, pretty)?);
    Ok(())
}

/// Renders the demo estimate without printing it.
pub fn render_demo(format: OutputFormat, pretty: bool) -> Result<String> {
    let input = demo_input();
    info!(
        region = input.region.name().unwrap_or_default(),
        "Running demo estimate"
    );

    let estimate = impact_core::run(&input)?;
    render(&estimate, format, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_run() {
        // Just verify the demo runs without error
        let result = run(OutputFormat::Table, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_demo_json() {
        let output = render_demo(OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["impact"]["dollarsInFlight"], 216_286_878);
        assert_eq!(value["severeImpact"]["dollarsInFlight"], 1_081_434_394);
    }
}

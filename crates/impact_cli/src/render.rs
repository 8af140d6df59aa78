//! Rendering of combined estimates for the terminal.

use impact_core::ImpactEstimate;

use crate::config::OutputFormat;
use crate::Result;

const METRIC_WIDTH: usize = 36;
const VALUE_WIDTH: usize = 15;

/// Render an estimate in the requested format
pub fn render(estimate: &ImpactEstimate, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(estimate)?),
        OutputFormat::Json => Ok(serde_json::to_string(estimate)?),
        OutputFormat::Xml => Ok(estimate.to_xml()?),
        OutputFormat::Table => Ok(render_table(estimate)),
    }
}

fn rule(left: char, middle: char, right: char) -> String {
    format!(
        "{left}{}{middle}{}{middle}{}{right}\n",
        "─".repeat(METRIC_WIDTH + 2),
        "─".repeat(VALUE_WIDTH + 2),
        "─".repeat(VALUE_WIDTH + 2),
    )
}

fn row(metric: &str, normal: &str, severe: &str) -> String {
    format!(
        "│ {:<mw$} │ {:>vw$} │ {:>vw$} │\n",
        metric,
        normal,
        severe,
        mw = METRIC_WIDTH,
        vw = VALUE_WIDTH
    )
}

fn render_table(estimate: &ImpactEstimate) -> String {
    let data = &estimate.data;
    let mut out = String::new();

    out.push_str(&format!(
        "Region: {} | Window: {} {} ({} days) | Reported cases: {}\n",
        data.region.name().unwrap_or("(unnamed)"),
        data.time_to_elapse,
        data.period_type,
        data.days(),
        data.reported_cases
    ));

    out.push_str(&rule('┌', '┬', '┐'));
    out.push_str(&row("Metric", "Normal", "Severe"));
    out.push_str(&rule('├', '┼', '┤'));

    let normal = estimate.impact.metrics();
    let severe = estimate.severe_impact.metrics();
    for ((name, normal_value), (_, severe_value)) in normal.iter().zip(severe.iter()) {
        out.push_str(&row(
            name,
            &normal_value.to_string(),
            &severe_value.to_string(),
        ));
    }

    out.push_str(&rule('└', '┴', '┘'));
    out
}

//! Periods command: prints the day count of each period type.

use impact_core::estimator::constants::DOUBLING_RATE_DAYS;
use impact_core::PeriodType;

use crate::Result;

/// Run the periods command
pub fn run() -> Result<()> {
    print!("{}", period_table());
    Ok(())
}

fn period_table() -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {:>8}\n", "Period", "Days"));
    out.push_str(&format!("{}\n", "-".repeat(19)));
    for period in PeriodType::ALL {
        out.push_str(&format!("{:<10} {:>8}\n", period.name(), period.days_per_period()));
    }
    out.push_str(&format!(
        "\nUnrecognised labels count as days. Infections double every {} days.\n",
        DOUBLING_RATE_DAYS
    ));
    out
}

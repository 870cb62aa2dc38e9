//! Table command implementation
//!
//! Prints discount factors on a monthly grid starting at the valuation date.

use curve_core::types::Date;
use tracing::info;

use super::{discount, render_table};
use crate::config::CurveConfig;
use crate::{CliError, Result};

/// Grid dates `valuation + k * step_months` for `k * step_months <= horizon_months`.
///
/// Month-end dates are clamped, so a 31 January valuation date steps to
/// the last day of February.
pub fn grid_dates(valuation: Date, step_months: u32, horizon_months: u32) -> Result<Vec<Date>> {
    if step_months == 0 {
        return Err(CliError::InvalidArgument(
            "step-months must be positive".to_string(),
        ));
    }

    (0..=horizon_months)
        .step_by(step_months as usize)
        .map(|months| {
            valuation.checked_add_months(months).ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "{valuation} + {months} months is out of range"
                ))
            })
        })
        .collect()
}

/// Run the table command
pub fn run(curve: &CurveConfig, step_months: u32, horizon_months: u32) -> Result<()> {
    let service = curve.builder()?.build_service()?;
    let dates = grid_dates(service.valuation_date(), step_months, horizon_months)?;

    info!(
        step_months,
        horizon_months,
        points = dates.len(),
        "Building discount factor table"
    );

    println!("{}", render_table(&discount::rows(&service, &dates)));
    Ok(())
}

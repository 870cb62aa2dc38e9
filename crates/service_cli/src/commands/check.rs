//! Check command implementation
//!
//! Builds the configured curve and prints a summary of both legs.

use curve_core::market_data::curves::{ComposedRateCurve, InterpolatedRateCurve};
use curve_core::types::{Date, DayCountConvention};
use tracing::{debug, info};

use crate::config::CurveConfig;
use crate::Result;

fn describe_leg(name: &str, leg: &InterpolatedRateCurve) -> String {
    let (t0, t1) = leg.domain();
    let first = leg.dates().first().map(Date::to_string).unwrap_or_default();
    let last = leg.dates().last().map(Date::to_string).unwrap_or_default();
    format!(
        "  {name:<8} {} knots, {first} .. {last} (t = {t0:.4} .. {t1:.4})",
        leg.dates().len()
    )
}

/// Human-readable summary of a built curve.
pub fn summary(curve: &ComposedRateCurve, valuation: Date, day_count: DayCountConvention) -> String {
    let mut lines = vec![
        format!("Valuation date: {valuation}"),
        format!("Day count:      {day_count}"),
        describe_leg("base", curve.base()),
    ];
    match curve.spread() {
        Some(spread) => lines.push(describe_leg("spread", spread)),
        None => lines.push(format!("  {:<8} none", "spread")),
    }
    lines.join("\n")
}

/// Run the check command
pub fn run(curve: &CurveConfig) -> Result<()> {
    info!("Checking curve definition...");

    let builder = curve.builder()?;
    let built = builder.build()?;

    let (t0, t1) = built.base().domain();
    debug!(t0, t1, flat = built.base().is_flat(), "Base leg axis");
    if let Some(spread) = built.spread() {
        let (t0, t1) = spread.domain();
        debug!(t0, t1, flat = spread.is_flat(), "Spread leg axis");
    }

    info!(
        base_points = built.base().dates().len(),
        spread = built.has_spread(),
        "Curve definition is valid"
    );

    println!(
        "{}",
        summary(&built, builder.valuation_date(), builder.day_count())
    );
    Ok(())
}

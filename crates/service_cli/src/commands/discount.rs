//! Discount command implementation
//!
//! Prints discount factors for the dates given on the command line.

use curve_core::market_data::curves::RateCurve;
use curve_core::market_data::DiscountFactorService;
use curve_core::types::Date;
use tracing::{debug, info, warn};

use super::{render_table, DiscountRow};
use crate::config::CurveConfig;
use crate::Result;

/// Rows for `dates`, in input order.
pub fn rows<C: RateCurve>(service: &DiscountFactorService<C>, dates: &[Date]) -> Vec<DiscountRow> {
    dates
        .iter()
        .map(|&date| DiscountRow::evaluate(service, date))
        .collect()
}

/// Run the discount command
pub fn run(curve: &CurveConfig, dates: &[Date]) -> Result<()> {
    let service = curve.builder()?.build_service()?;
    info!(
        valuation_date = %service.valuation_date(),
        day_count = %service.day_count(),
        dates = dates.len(),
        "Computing discount factors"
    );

    let valuation = service.valuation_date();
    for &date in dates.iter().filter(|&&d| d < valuation) {
        warn!(%date, "Target date precedes valuation date");
    }

    let table = rows(&service, dates);
    for row in &table {
        debug!(date = %row.date, t = row.year_fraction, rate = row.rate, df = row.discount_factor);
    }

    println!("{}", render_table(&table));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curve_core::market_data::curves::CurveBuilder;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_rows_follow_input_order() {
        let mut ois = BTreeMap::new();
        ois.insert(date(2024, 7, 1), 0.028);
        ois.insert(date(2025, 1, 1), 0.03);
        let service = CurveBuilder::new(ois, date(2024, 1, 1))
            .build_service()
            .unwrap();

        let targets = [date(2025, 1, 1), date(2024, 1, 1), date(2024, 7, 1)];
        let rows = rows(&service, &targets);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.date).collect::<Vec<_>>(),
            targets.to_vec()
        );
        assert_eq!(rows[1].discount_factor, 1.0);
        assert_relative_eq!(rows[0].rate, 0.03, epsilon = 1e-12);
        assert_relative_eq!(
            rows[0].discount_factor,
            (-0.03 * 366.0 / 365.0_f64).exp(),
            epsilon = 1e-12
        );
    }
}

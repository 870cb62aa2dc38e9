//! CLI command implementations

pub mod check;
pub mod discount;
pub mod table;

use curve_core::market_data::curves::RateCurve;
use curve_core::market_data::DiscountFactorService;
use curve_core::types::Date;

/// One line of a discount factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRow {
    /// Target date
    pub date: Date,
    /// Year fraction from the valuation date
    pub year_fraction: f64,
    /// Total funding rate at the target
    pub rate: f64,
    /// Discount factor at the target
    pub discount_factor: f64,
}

impl DiscountRow {
    /// Evaluate `service` at `date`.
    pub fn evaluate<C: RateCurve>(service: &DiscountFactorService<C>, date: Date) -> Self {
        Self {
            date,
            year_fraction: service.year_fraction(date),
            rate: service.rate(date),
            discount_factor: service.discount_factor(date),
        }
    }
}

/// Render rows as a fixed-width table.
pub fn render_table(rows: &[DiscountRow]) -> String {
    let mut out = String::new();
    out.push_str("┌────────────┬────────────┬────────────┬──────────────┐\n");
    out.push_str("│ Date       │      Years │   Rate (%) │           DF │\n");
    out.push_str("├────────────┼────────────┼────────────┼──────────────┤\n");
    for row in rows {
        out.push_str(&format!(
            "│ {} │ {:>10.6} │ {:>10.5} │ {:>12.10} │\n",
            row.date,
            row.year_fraction,
            row.rate * 100.0,
            row.discount_factor
        ));
    }
    out.push_str("└────────────┴────────────┴────────────┴──────────────┘");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::market_data::curves::CurveBuilder;
    use std::collections::BTreeMap;

    #[test]
    fn test_row_at_valuation_date() {
        let valuation = Date::from_ymd(2024, 1, 1).unwrap();
        let mut ois = BTreeMap::new();
        ois.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
        let service = CurveBuilder::new(ois, valuation).build_service().unwrap();

        let row = DiscountRow::evaluate(&service, valuation);
        assert_eq!(row.year_fraction, 0.0);
        assert_eq!(row.rate, 0.03);
        assert_eq!(row.discount_factor, 1.0);
    }

    #[test]
    fn test_render_table_has_one_line_per_row() {
        let row = DiscountRow {
            date: Date::from_ymd(2025, 1, 1).unwrap(),
            year_fraction: 1.0,
            rate: 0.03,
            discount_factor: 0.9704455335,
        };
        let table = render_table(&[row, row]);

        assert_eq!(table.lines().count(), 5 + 1);
        assert!(table.contains("2025-01-01"));
        assert!(table.contains("3.00000"));
        assert!(table.contains("0.9704455335"));
    }
}

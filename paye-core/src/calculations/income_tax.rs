//! Progressive band income-tax calculation.
//!
//! Walks an ordered marginal-rate schedule, taxing each band's width in
//! turn; the final unbounded band takes whatever remains. One loop serves
//! the three-band England/Wales/NI schedule and the longer Scottish ones —
//! band counts are never special-cased.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::calculations::BandTaxCalculator;
//! use paye_core::models::{BandSchedule, TaxBand};
//!
//! let schedule = BandSchedule::new(vec![
//!     TaxBand { rate: dec!(0.20), ceiling: Some(dec!(37700)) },
//!     TaxBand { rate: dec!(0.40), ceiling: Some(dec!(125140)) },
//!     TaxBand { rate: dec!(0.45), ceiling: None },
//! ])
//! .unwrap();
//!
//! let calculator = BandTaxCalculator::new(&schedule);
//!
//! // 50,000 of taxable income: 37,700 at 20% plus 12,300 at 40%.
//! assert_eq!(calculator.tax_due(dec!(50000)), dec!(12460.00));
//! ```

use rust_decimal::Decimal;

use super::common::round_half_up;
use crate::models::BandSchedule;

#[derive(Debug, Clone)]
pub struct BandTaxCalculator<'a> {
    schedule: &'a BandSchedule,
}

impl<'a> BandTaxCalculator<'a> {
    pub fn new(schedule: &'a BandSchedule) -> Self {
        Self { schedule }
    }

    /// Cumulative tax due on `taxable_income`, rounded to pennies.
    /// Non-positive input owes nothing.
    pub fn tax_due(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut remaining = taxable_income;
        let mut floor = Decimal::ZERO;
        let mut total = Decimal::ZERO;
        for band in self.schedule.bands() {
            let slice = match band.ceiling {
                Some(ceiling) => remaining.min(ceiling - floor),
                None => remaining,
            };
            total += slice * band.rate;
            remaining -= slice;
            if remaining <= Decimal::ZERO {
                break;
            }
            if let Some(ceiling) = band.ceiling {
                floor = ceiling;
            }
        }

        round_half_up(total)
    }
}

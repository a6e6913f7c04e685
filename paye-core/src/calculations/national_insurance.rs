//! Employee National Insurance on cumulative gross pay.
//!
//! Earnings between the primary threshold and the upper earnings limit pay
//! the main rate; earnings above the limit pay the upper rate. Thresholds
//! are annual figures applied to the cumulative gross amount — they are not
//! prorated month by month.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::calculations::NicCalculator;
//! use paye_core::models::NicBands;
//!
//! let bands = NicBands {
//!     primary_threshold: dec!(12570),
//!     upper_earnings_limit: dec!(50270),
//!     main_rate: dec!(0.08),
//!     upper_rate: dec!(0.02),
//! };
//!
//! let calculator = NicCalculator::new(&bands);
//!
//! // (50000 - 12570) * 0.08 = 2994.40
//! assert_eq!(calculator.contributions_due(dec!(50000)), dec!(2994.40));
//! ```

use rust_decimal::Decimal;

use super::common::round_half_up;
use crate::models::NicBands;

#[derive(Debug, Clone)]
pub struct NicCalculator<'a> {
    bands: &'a NicBands,
}

impl<'a> NicCalculator<'a> {
    pub fn new(bands: &'a NicBands) -> Self {
        Self { bands }
    }

    /// Cumulative contributions due on `gross_income`, rounded to pennies.
    pub fn contributions_due(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        let main_band = (gross_income.min(self.bands.upper_earnings_limit)
            - self.bands.primary_threshold)
            .max(Decimal::ZERO);
        let upper_band = (gross_income - self.bands.upper_earnings_limit).max(Decimal::ZERO);

        round_half_up(main_band * self.bands.main_rate + upper_band * self.bands.upper_rate)
    }
}

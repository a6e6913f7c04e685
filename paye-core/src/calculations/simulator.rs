//! The 12-month cumulative PAYE simulation.
//!
//! Tax and National Insurance owed in any month derive from year-to-date
//! figures, not from the month in isolation, so the simulator folds an
//! explicit accumulator through the twelve months in tax-year order. Each
//! step performs the following sequence:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross pay: base pay + back-pay + bonus from the timeline |
//! | 2    | Pension contribution on this month's pensionable pay |
//! | 3    | YTD taxable income: YTD gross + prorated benefits − YTD pension − prorated allowance, floored at 0 |
//! | 4    | Month tax: band tax on YTD taxable income minus tax already charged, clamped at 0 |
//! | 5    | Month NIC: contributions on YTD gross minus NIC already charged, clamped at 0 |
//! | 6    | Take-home: gross − tax − NIC − pension |
//! | 7    | Advance the accumulator, emit one monthly result |
//!
//! The month loop always runs sequentially April through March — later
//! months' year-to-date figures depend on earlier ones — and every running
//! total lives in the accumulator threaded through the fold, so concurrent
//! invocations cannot observe each other.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::calculations::{PayTimeline, PensionAccrual, PayrollSimulator};
//! use paye_core::models::{PayrollInput, Region, TaxMonth};
//! use paye_core::registry::TaxYearRegistry;
//!
//! let input = PayrollInput {
//!     salary: dec!(50000),
//!     bonus: dec!(0),
//!     bonus_month: TaxMonth::April,
//!     pension_contribution_percent: dec!(0),
//!     bonus_pensionable: false,
//!     pensionable_bonus_percent: dec!(0),
//!     taxable_benefits: dec!(0),
//!     pay_rise: None,
//!     tax_code: "1257L".to_string(),
//!     region: Region::England,
//!     tax_year: "2024/25".to_string(),
//! };
//!
//! let config = TaxYearRegistry::lookup(&input.tax_year).unwrap();
//! let timeline = PayTimeline::build(&input);
//! let pension = PensionAccrual::new(&input, &timeline);
//! let simulator = PayrollSimulator::new(
//!     config.schedule_for(input.region),
//!     &config.nic,
//!     &timeline,
//!     &pension,
//!     dec!(12570),
//!     dec!(0),
//! );
//!
//! let months = simulator.run();
//!
//! assert_eq!(months.len(), 12);
//! let annual_tax: rust_decimal::Decimal = months.iter().map(|m| m.tax).sum();
//! assert_eq!(annual_tax, dec!(7486.00));
//! ```

use rust_decimal::Decimal;

use super::common::pro_rata;
use super::income_tax::BandTaxCalculator;
use super::national_insurance::NicCalculator;
use super::pension::PensionAccrual;
use super::timeline::PayTimeline;
use crate::models::{BandSchedule, MONTHS_PER_YEAR, MonthlyResult, NicBands, TaxMonth};

/// Running totals carried between months. A fresh value is created per
/// invocation; nothing outlives the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YtdTotals {
    pub gross: Decimal,
    pub tax: Decimal,
    pub national_insurance: Decimal,
    pub pension: Decimal,
}

#[derive(Debug, Clone)]
pub struct PayrollSimulator<'a> {
    tax: BandTaxCalculator<'a>,
    nic: NicCalculator<'a>,
    timeline: &'a PayTimeline,
    pension: &'a PensionAccrual<'a>,
    annual_allowance: Decimal,
    annual_benefits: Decimal,
}

impl<'a> PayrollSimulator<'a> {
    pub fn new(
        schedule: &'a BandSchedule,
        nic_bands: &'a NicBands,
        timeline: &'a PayTimeline,
        pension: &'a PensionAccrual<'a>,
        annual_allowance: Decimal,
        annual_benefits: Decimal,
    ) -> Self {
        Self {
            tax: BandTaxCalculator::new(schedule),
            nic: NicCalculator::new(nic_bands),
            timeline,
            pension,
            annual_allowance,
            annual_benefits,
        }
    }

    /// Folds the accumulator through all twelve months and collects the
    /// monthly series.
    pub fn run(&self) -> Vec<MonthlyResult> {
        let mut ytd = YtdTotals::default();
        let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
        for index in 0..MONTHS_PER_YEAR {
            let (next, month) = self.step(ytd, index);
            ytd = next;
            months.push(month);
        }

        months
    }

    /// One month of the fold: consumes the running totals, returns the
    /// advanced totals and the month's figures.
    pub fn step(
        &self,
        ytd: YtdTotals,
        month_index: usize,
    ) -> (YtdTotals, MonthlyResult) {
        let cashflow = &self.timeline.months()[month_index];
        let gross = cashflow.gross();
        let pension = self.pension.monthly_contribution(cashflow);

        let ytd_gross = ytd.gross + gross;
        let ytd_pension = ytd.pension + pension;
        let months_elapsed = month_index + 1;

        let taxable = (ytd_gross + pro_rata(self.annual_benefits, months_elapsed)
            - ytd_pension
            - pro_rata(self.annual_allowance, months_elapsed))
        .max(Decimal::ZERO);

        // Cumulative-method deltas. The clamps keep a month from going
        // negative when year-to-date figures move non-monotonically.
        let tax = (self.tax.tax_due(taxable) - ytd.tax).max(Decimal::ZERO);
        let national_insurance = (self.nic.contributions_due(ytd_gross)
            - ytd.national_insurance)
            .max(Decimal::ZERO);

        let take_home = gross - tax - national_insurance - pension;

        let next = YtdTotals {
            gross: ytd_gross,
            tax: ytd.tax + tax,
            national_insurance: ytd.national_insurance + national_insurance,
            pension: ytd_pension,
        };
        let month = MonthlyResult {
            month: TaxMonth::ALL[month_index],
            gross,
            pension,
            tax,
            national_insurance,
            take_home,
        };

        (next, month)
    }
}

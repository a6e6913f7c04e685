//! Annual aggregation of the monthly series.

use rust_decimal::Decimal;

use super::common::round_half_up;
use crate::models::{AnnualTotals, BreakdownEntry, DeductionCategory, MonthlyResult, PayrollResult};

/// Sums the monthly series field by field and attaches the categorised
/// breakdown. Totals are only ever produced by summation, so they
/// reconcile with the monthly entries by construction.
pub fn aggregate(
    months: Vec<MonthlyResult>,
    personal_allowance: Decimal,
) -> PayrollResult {
    let mut gross = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut national_insurance = Decimal::ZERO;
    let mut pension = Decimal::ZERO;
    let mut take_home = Decimal::ZERO;
    for month in &months {
        gross += month.gross;
        tax += month.tax;
        national_insurance += month.national_insurance;
        pension += month.pension;
        take_home += month.take_home;
    }

    let effective_tax_rate = if gross.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up((tax + national_insurance) / gross * Decimal::ONE_HUNDRED)
    };

    let breakdown = vec![
        BreakdownEntry {
            category: DeductionCategory::TakeHome,
            amount: take_home,
        },
        BreakdownEntry {
            category: DeductionCategory::IncomeTax,
            amount: tax,
        },
        BreakdownEntry {
            category: DeductionCategory::NationalInsurance,
            amount: national_insurance,
        },
        BreakdownEntry {
            category: DeductionCategory::Pension,
            amount: pension,
        },
    ];

    PayrollResult {
        annual: AnnualTotals {
            gross,
            tax,
            national_insurance,
            pension,
            take_home,
            effective_tax_rate,
        },
        personal_allowance,
        months,
        breakdown,
    }
}

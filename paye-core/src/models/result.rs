use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::TaxMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionCategory {
    TakeHome,
    IncomeTax,
    NationalInsurance,
    Pension,
}

impl DeductionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TakeHome => "Take-home pay",
            Self::IncomeTax => "Income tax",
            Self::NationalInsurance => "National Insurance",
            Self::Pension => "Pension",
        }
    }
}

/// One slice of the categorised deduction breakdown used for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: DeductionCategory,
    pub amount: Decimal,
}

/// Payroll figures for a single month. For every month
/// `gross - pension - tax - national_insurance == take_home` holds exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    pub month: TaxMonth,
    pub gross: Decimal,
    pub pension: Decimal,
    pub tax: Decimal,
    pub national_insurance: Decimal,
    pub take_home: Decimal,
}

/// Annual aggregates. Always produced by summing the monthly series, never
/// from a separate annual formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualTotals {
    pub gross: Decimal,
    pub tax: Decimal,
    pub national_insurance: Decimal,
    pub pension: Decimal,
    pub take_home: Decimal,
    /// `(tax + national_insurance) / gross` as a percentage, 0 when gross is 0.
    pub effective_tax_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub annual: AnnualTotals,
    pub personal_allowance: Decimal,
    pub months: Vec<MonthlyResult>,
    pub breakdown: Vec<BreakdownEntry>,
}

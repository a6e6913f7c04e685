use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month::TaxMonth;
use super::region::Region;

/// A mid-year pay rise: the new annual salary and the month it takes effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRise {
    pub new_salary: Decimal,
    pub effective_month: TaxMonth,
}

/// One year's income profile, as validated by the caller.
///
/// All numeric fields are non-negative and percentages sit in [0, 100];
/// the engine does not re-validate them. The tax year is the only field
/// checked downstream, because an unknown year has no reasonable default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    pub salary: Decimal,

    #[serde(default)]
    pub bonus: Decimal,

    /// Month the one-off bonus is paid in. Ignored when `bonus` is zero.
    #[serde(default)]
    pub bonus_month: TaxMonth,

    /// Pension contribution as a percent of pensionable pay, 0-100.
    #[serde(default)]
    pub pension_contribution_percent: Decimal,

    #[serde(default)]
    pub bonus_pensionable: bool,

    /// Share of the bonus that is pensionable, 0-100. Only consulted when
    /// `bonus_pensionable` is set.
    #[serde(default)]
    pub pensionable_bonus_percent: Decimal,

    /// Annual value of taxable benefits in kind, accrued evenly over the year.
    #[serde(default)]
    pub taxable_benefits: Decimal,

    #[serde(default)]
    pub pay_rise: Option<PayRise>,

    pub tax_code: String,
    pub region: Region,
    pub tax_year: String,
}

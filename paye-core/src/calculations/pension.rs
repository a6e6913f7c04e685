//! Pension accrual.
//!
//! Two deliberately separate computations share this module. The first pass
//! produces the annual contribution total used only to derive the
//! personal-allowance taper; the second produces the per-month deductions
//! that appear on payslips, and their sum is the reported annual pension.
//! The first pass works from the active salary alone, so when a mid-year
//! rise adds back-pay the two totals part company by the contribution on
//! that back-pay. The published figures follow the second pass; the two are
//! not reconciled.

use rust_decimal::Decimal;

use super::common::percent_of;
use super::timeline::{MonthCashflow, PayTimeline};
use crate::models::PayrollInput;

#[derive(Debug, Clone)]
pub struct PensionAccrual<'a> {
    input: &'a PayrollInput,
    timeline: &'a PayTimeline,
}

impl<'a> PensionAccrual<'a> {
    pub fn new(
        input: &'a PayrollInput,
        timeline: &'a PayTimeline,
    ) -> Self {
        Self { input, timeline }
    }

    /// The pensionable share of a bonus amount. Zero unless the bonus is
    /// flagged pensionable.
    fn pensionable_bonus(
        &self,
        bonus: Decimal,
    ) -> Decimal {
        if self.input.bonus_pensionable {
            percent_of(bonus, self.input.pensionable_bonus_percent)
        } else {
            Decimal::ZERO
        }
    }

    /// First pass: the annual contribution used for the allowance taper.
    /// Base pay at the active salary plus the pensionable bonus share;
    /// back-pay is not included.
    pub fn annual_contribution_for_taper(&self) -> Decimal {
        let pensionable =
            self.timeline.annual_base_pay() + self.pensionable_bonus(self.input.bonus);

        percent_of(pensionable, self.input.pension_contribution_percent)
    }

    /// Second pass: the contribution deducted in one month. Back-pay is
    /// pensionable here.
    pub fn monthly_contribution(
        &self,
        cashflow: &MonthCashflow,
    ) -> Decimal {
        let pensionable =
            cashflow.base_pay + cashflow.back_pay + self.pensionable_bonus(cashflow.bonus);

        percent_of(pensionable, self.input.pension_contribution_percent)
    }
}

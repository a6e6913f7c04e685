//! Month-by-month pay amounts before deductions.

use rust_decimal::Decimal;

use super::common::{monthly_share, pro_rata};
use crate::models::{MONTHS_PER_YEAR, PayrollInput};

/// Cash paid in one month, split by origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCashflow {
    pub base_pay: Decimal,
    pub back_pay: Decimal,
    pub bonus: Decimal,
}

impl MonthCashflow {
    pub fn gross(&self) -> Decimal {
        self.base_pay + self.back_pay + self.bonus
    }
}

/// The year's pay events resolved into twelve per-month amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayTimeline {
    months: Vec<MonthCashflow>,
}

impl PayTimeline {
    /// Resolves salary, pay rise and bonus into per-month cash amounts.
    ///
    /// Base pay is allocated cumulatively — this month's accrual of the
    /// active salary less last month's — so a flat year sums to the salary
    /// to the penny. Back-pay lands once, in the rise's effective month
    /// (when that month is not the first), covering the months already paid
    /// at the old rate. The bonus lands whole in its designated month.
    pub fn build(input: &PayrollInput) -> Self {
        let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
        for index in 0..MONTHS_PER_YEAR {
            let mut active_salary = input.salary;
            let mut back_pay = Decimal::ZERO;
            if let Some(rise) = &input.pay_rise {
                let start = rise.effective_month.index();
                if index >= start {
                    active_salary = rise.new_salary;
                }
                if index == start && start > 0 {
                    back_pay = pro_rata(rise.new_salary - input.salary, start);
                }
            }

            let bonus = if index == input.bonus_month.index() {
                input.bonus
            } else {
                Decimal::ZERO
            };

            months.push(MonthCashflow {
                base_pay: monthly_share(active_salary, index),
                back_pay,
                bonus,
            });
        }

        Self { months }
    }

    pub fn months(&self) -> &[MonthCashflow] {
        &self.months
    }

    /// Total paid over the year, back-pay and bonus included.
    pub fn annual_gross(&self) -> Decimal {
        self.months.iter().map(MonthCashflow::gross).sum()
    }

    /// Total base pay at the active salary, excluding back-pay and bonus.
    pub fn annual_base_pay(&self) -> Decimal {
        self.months.iter().map(|month| month.base_pay).sum()
    }
}

//! Shared arithmetic helpers for payroll calculations.

use rust_decimal::Decimal;

use crate::models::MONTHS_PER_YEAR;

fn months_per_year() -> Decimal {
    Decimal::from(MONTHS_PER_YEAR as u32)
}

/// Rounds a monetary value to pennies using half-up rounding.
///
/// Values at exactly half a penny round away from zero, the standard
/// financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// The share of an annual amount accrued by the end of `months_elapsed`
/// months, rounded to pennies.
pub fn pro_rata(
    annual: Decimal,
    months_elapsed: usize,
) -> Decimal {
    round_half_up(annual * Decimal::from(months_elapsed as u32) / months_per_year())
}

/// The portion of an annual amount paid in the month at `month_index`.
///
/// Allocated cumulatively (this month's accrual less last month's), so the
/// twelve shares always sum to the annual figure even when it does not
/// divide into whole pennies.
pub fn monthly_share(
    annual: Decimal,
    month_index: usize,
) -> Decimal {
    pro_rata(annual, month_index + 1) - pro_rata(annual, month_index)
}

/// Applies a percentage in [0, 100] to an amount, rounded to pennies.
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    round_half_up(amount * percent / Decimal::ONE_HUNDRED)
}

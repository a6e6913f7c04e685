//! Personal-allowance taper.

use rust_decimal::Decimal;

use super::common::round_half_up;

/// Applies the high-income taper: above the threshold the allowance shrinks
/// by half the excess, floored at zero.
///
/// `adjusted_net_income` is the year's total income subject to tax less the
/// annual pension total from the accrual engine's first pass.
pub fn tapered_allowance(
    base_allowance: Decimal,
    adjusted_net_income: Decimal,
    taper_threshold: Decimal,
) -> Decimal {
    if adjusted_net_income <= taper_threshold {
        return base_allowance;
    }

    let reduction = round_half_up((adjusted_net_income - taper_threshold) / Decimal::TWO);
    (base_allowance - reduction).max(Decimal::ZERO)
}

//! Payroll calculation modules.
//!
//! The entry point is [`calculate`], which wires the per-year tables, the
//! tax-code and taper rules, and the cumulative month-by-month simulation
//! into one pass over a validated income profile.

pub mod aggregate;
pub mod allowance;
pub mod common;
pub mod income_tax;
pub mod national_insurance;
pub mod pension;
pub mod simulator;
pub mod tax_code;
pub mod timeline;

pub use income_tax::BandTaxCalculator;
pub use national_insurance::NicCalculator;
pub use pension::PensionAccrual;
pub use simulator::{PayrollSimulator, YtdTotals};
pub use tax_code::TaxCode;
pub use timeline::{MonthCashflow, PayTimeline};

use thiserror::Error;

use crate::models::{PayrollInput, PayrollResult, TaxYearConfig};
use crate::registry::{RegistryError, TaxYearRegistry};

/// Errors surfaced by [`calculate`]. The engine is total over validated
/// input; only an unknown tax year fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Runs a full year of payroll for one validated income profile.
///
/// Pure and stateless: identical input yields identical output, and every
/// intermediate value lives on this call's stack. The pension/allowance
/// circularity resolves in two passes — the annual pension total fixes the
/// tapered allowance first, then the twelve months are simulated against
/// that fixed allowance.
///
/// # Errors
///
/// Returns [`PayrollError`] when the input names a tax year the registry
/// does not know.
pub fn calculate(input: &PayrollInput) -> Result<PayrollResult, PayrollError> {
    let config = TaxYearRegistry::lookup(&input.tax_year)?;

    Ok(calculate_with_config(input, &config))
}

/// Runs the year against an explicit table, bypassing the built-in
/// registry. Total over validated input; callers supplying tables loaded
/// from external files resolve the year themselves.
pub fn calculate_with_config(
    input: &PayrollInput,
    config: &TaxYearConfig,
) -> PayrollResult {
    let schedule = config.schedule_for(input.region);

    let timeline = PayTimeline::build(input);
    let pension = PensionAccrual::new(input, &timeline);

    // First pass: pin the allowance from the annual pension total.
    let adjusted_net_income =
        timeline.annual_gross() + input.taxable_benefits - pension.annual_contribution_for_taper();
    let base_allowance = TaxCode::parse(&input.tax_code).base_allowance(config.personal_allowance);
    let personal_allowance =
        allowance::tapered_allowance(base_allowance, adjusted_net_income, config.taper_threshold);

    // Second pass: the cumulative month-by-month simulation.
    let simulator = PayrollSimulator::new(
        schedule,
        &config.nic,
        &timeline,
        &pension,
        personal_allowance,
        input.taxable_benefits,
    );
    let months = simulator.run();

    aggregate::aggregate(months, personal_allowance)
}

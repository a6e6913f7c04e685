use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::band::BandSchedule;
use super::region::{Region, ScheduleVariant};

/// National Insurance band parameters for a tax year. Thresholds are
/// annual amounts; rates apply to the cumulative gross figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicBands {
    pub primary_threshold: Decimal,
    pub upper_earnings_limit: Decimal,
    pub main_rate: Decimal,
    pub upper_rate: Decimal,
}

/// The two income-tax schedule variants in force for any year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSchedules {
    pub england_wales_ni: BandSchedule,
    pub scotland: BandSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: String,
    pub personal_allowance: Decimal,
    pub taper_threshold: Decimal,
    pub schedules: RegionSchedules,
    pub nic: NicBands,
}

impl TaxYearConfig {
    pub fn schedule_for(
        &self,
        region: Region,
    ) -> &BandSchedule {
        match region.schedule_variant() {
            ScheduleVariant::EnglandWalesNi => &self.schedules.england_wales_ni,
            ScheduleVariant::Scotland => &self.schedules.scotland,
        }
    }
}

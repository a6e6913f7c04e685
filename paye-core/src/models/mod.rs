mod band;
mod input;
mod month;
mod region;
mod result;
mod tax_year_config;

pub use band::{BandSchedule, ScheduleError, TaxBand};
pub use input::{PayRise, PayrollInput};
pub use month::{MONTHS_PER_YEAR, TaxMonth};
pub use region::{Region, ScheduleVariant};
pub use result::{AnnualTotals, BreakdownEntry, DeductionCategory, MonthlyResult, PayrollResult};
pub use tax_year_config::{NicBands, RegionSchedules, TaxYearConfig};

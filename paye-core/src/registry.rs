//! Static lookup of per-year tax constants.
//!
//! Values are the published HMRC figures for each supported tax year. The
//! Scottish schedule varies in band count: 2023/24 has five bands, while
//! 2024/25 and 2025/26 carry six after the advanced band was introduced.
//! England, Wales and Northern Ireland share one three-band schedule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{
    BandSchedule, NicBands, RegionSchedules, ScheduleError, TaxBand, TaxYearConfig,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested year has no table. Fatal: there is no reasonable
    /// default set of rates to fall back to.
    #[error("unknown tax year '{0}'")]
    UnknownTaxYear(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Immutable registry of the tax years this engine knows about.
pub struct TaxYearRegistry;

impl TaxYearRegistry {
    pub const KNOWN_YEARS: [&'static str; 3] = ["2023/24", "2024/25", "2025/26"];

    /// Builds the constant table for `tax_year`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTaxYear`] when the year key is absent.
    pub fn lookup(tax_year: &str) -> Result<TaxYearConfig, RegistryError> {
        match tax_year {
            "2023/24" => year_2023_24(),
            "2024/25" => year_2024_25(),
            "2025/26" => year_2025_26(),
            other => Err(RegistryError::UnknownTaxYear(other.to_string())),
        }
    }
}

fn band(
    rate: Decimal,
    ceiling: Decimal,
) -> TaxBand {
    TaxBand {
        rate,
        ceiling: Some(ceiling),
    }
}

fn top_band(rate: Decimal) -> TaxBand {
    TaxBand { rate, ceiling: None }
}

/// The rest-of-UK schedule, unchanged across the supported years. Ceilings
/// are cumulative taxable income above the personal allowance.
fn england_wales_ni_bands() -> Result<BandSchedule, ScheduleError> {
    BandSchedule::new(vec![
        band(dec!(0.20), dec!(37700)),
        band(dec!(0.40), dec!(125140)),
        top_band(dec!(0.45)),
    ])
}

fn year_2023_24() -> Result<TaxYearConfig, RegistryError> {
    Ok(TaxYearConfig {
        tax_year: "2023/24".to_string(),
        personal_allowance: dec!(12570),
        taper_threshold: dec!(100000),
        schedules: RegionSchedules {
            england_wales_ni: england_wales_ni_bands()?,
            // Five bands: no advanced band this year.
            scotland: BandSchedule::new(vec![
                band(dec!(0.19), dec!(2162)),
                band(dec!(0.20), dec!(13118)),
                band(dec!(0.21), dec!(31092)),
                band(dec!(0.42), dec!(112570)),
                top_band(dec!(0.47)),
            ])?,
        },
        // Main rate as in force at the year end, after the January 2024 cut.
        nic: NicBands {
            primary_threshold: dec!(12570),
            upper_earnings_limit: dec!(50270),
            main_rate: dec!(0.10),
            upper_rate: dec!(0.02),
        },
    })
}

fn year_2024_25() -> Result<TaxYearConfig, RegistryError> {
    Ok(TaxYearConfig {
        tax_year: "2024/25".to_string(),
        personal_allowance: dec!(12570),
        taper_threshold: dec!(100000),
        schedules: RegionSchedules {
            england_wales_ni: england_wales_ni_bands()?,
            scotland: BandSchedule::new(vec![
                band(dec!(0.19), dec!(2306)),
                band(dec!(0.20), dec!(13991)),
                band(dec!(0.21), dec!(31092)),
                band(dec!(0.42), dec!(62430)),
                band(dec!(0.45), dec!(112570)),
                top_band(dec!(0.48)),
            ])?,
        },
        nic: NicBands {
            primary_threshold: dec!(12570),
            upper_earnings_limit: dec!(50270),
            main_rate: dec!(0.08),
            upper_rate: dec!(0.02),
        },
    })
}

fn year_2025_26() -> Result<TaxYearConfig, RegistryError> {
    Ok(TaxYearConfig {
        tax_year: "2025/26".to_string(),
        personal_allowance: dec!(12570),
        taper_threshold: dec!(100000),
        schedules: RegionSchedules {
            england_wales_ni: england_wales_ni_bands()?,
            scotland: BandSchedule::new(vec![
                band(dec!(0.19), dec!(2827)),
                band(dec!(0.20), dec!(14921)),
                band(dec!(0.21), dec!(31092)),
                band(dec!(0.42), dec!(62430)),
                band(dec!(0.45), dec!(112570)),
                top_band(dec!(0.48)),
            ])?,
        },
        nic: NicBands {
            primary_threshold: dec!(12570),
            upper_earnings_limit: dec!(50270),
            main_rate: dec!(0.08),
            upper_rate: dec!(0.02),
        },
    })
}

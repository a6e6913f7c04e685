use std::collections::BTreeMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use paye_core::models::{
    BandSchedule, NicBands, RegionSchedules, ScheduleError, TaxBand, TaxYearConfig,
};

/// Errors that can occur when loading tax table data.
#[derive(Debug, Error)]
pub enum TaxTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid schedule code: {0}")]
    InvalidScheduleCode(String),

    #[error("Tax year {0} has band rows but no parameter row")]
    MissingYearParams(String),

    #[error("Tax year {0} has no '{1}' band schedule")]
    MissingSchedule(String, &'static str),

    #[error("Invalid band schedule for tax year {0}: {1}")]
    InvalidSchedule(String, #[source] ScheduleError),
}

impl From<csv::Error> for TaxTableLoaderError {
    fn from(err: csv::Error) -> Self {
        TaxTableLoaderError::CsvParse(err.to_string())
    }
}

/// CSV schedule codes for the two variants.
///
/// - `EWNI` → the shared England/Wales/Northern Ireland schedule
/// - `SCO` → the Scottish schedule
const CODE_EWNI: &str = "EWNI";
const CODE_SCOTLAND: &str = "SCO";

/// A single row from the band schedules CSV file.
///
/// Rows must appear in ascending ceiling order within each
/// (tax_year, schedule) group; an empty `ceiling` marks the final,
/// unbounded band.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BandRecord {
    pub tax_year: String,
    pub schedule: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
}

/// A single row from the per-year parameters CSV file: the personal
/// allowance, the taper threshold, and the NIC band figures.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct YearParamsRecord {
    pub tax_year: String,
    pub personal_allowance: Decimal,
    pub taper_threshold: Decimal,
    pub nic_primary_threshold: Decimal,
    pub nic_upper_earnings_limit: Decimal,
    pub nic_main_rate: Decimal,
    pub nic_upper_rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for published tax tables in CSV form.
///
/// Rates change every fiscal year; this loader turns the two CSV files
/// (band schedules and per-year parameters) into the same `TaxYearConfig`
/// values the built-in registry produces, so a new year can be supplied
/// without a code change. Parsing is side-effect free and the same input
/// always assembles the same configs.
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parse band rows from a CSV reader.
    pub fn parse_bands<R: Read>(reader: R) -> Result<Vec<BandRecord>, TaxTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BandRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse per-year parameter rows from a CSV reader.
    pub fn parse_year_params<R: Read>(
        reader: R
    ) -> Result<Vec<YearParamsRecord>, TaxTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: YearParamsRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assembles parsed rows into one config per tax year with band rows.
    ///
    /// Each year needs a parameter row and both schedule variants; every
    /// schedule passes through `BandSchedule::new`, so ordering and
    /// unbounded-band mistakes in the CSV surface as errors rather than
    /// silently producing a bad table. Parameter rows for years without
    /// band rows are ignored. Configs come back sorted by year key.
    pub fn assemble(
        params: &[YearParamsRecord],
        bands: &[BandRecord],
    ) -> Result<Vec<TaxYearConfig>, TaxTableLoaderError> {
        // Group band rows by year, preserving file order within each group.
        let mut groups: BTreeMap<String, (Vec<TaxBand>, Vec<TaxBand>)> = BTreeMap::new();
        for record in bands {
            let entry = groups.entry(record.tax_year.clone()).or_default();
            let band = TaxBand {
                rate: record.rate,
                ceiling: record.ceiling,
            };
            match record.schedule.as_str() {
                CODE_EWNI => entry.0.push(band),
                CODE_SCOTLAND => entry.1.push(band),
                other => {
                    return Err(TaxTableLoaderError::InvalidScheduleCode(other.to_string()));
                }
            }
        }

        let mut configs = Vec::with_capacity(groups.len());
        for (tax_year, (ewni, scotland)) in groups {
            let year_params = params
                .iter()
                .find(|record| record.tax_year == tax_year)
                .ok_or_else(|| TaxTableLoaderError::MissingYearParams(tax_year.clone()))?;

            if ewni.is_empty() {
                return Err(TaxTableLoaderError::MissingSchedule(tax_year, CODE_EWNI));
            }
            if scotland.is_empty() {
                return Err(TaxTableLoaderError::MissingSchedule(
                    tax_year,
                    CODE_SCOTLAND,
                ));
            }

            let england_wales_ni = BandSchedule::new(ewni)
                .map_err(|err| TaxTableLoaderError::InvalidSchedule(tax_year.clone(), err))?;
            let scotland = BandSchedule::new(scotland)
                .map_err(|err| TaxTableLoaderError::InvalidSchedule(tax_year.clone(), err))?;

            configs.push(TaxYearConfig {
                tax_year,
                personal_allowance: year_params.personal_allowance,
                taper_threshold: year_params.taper_threshold,
                schedules: RegionSchedules {
                    england_wales_ni,
                    scotland,
                },
                nic: NicBands {
                    primary_threshold: year_params.nic_primary_threshold,
                    upper_earnings_limit: year_params.nic_upper_earnings_limit,
                    main_rate: year_params.nic_main_rate,
                    upper_rate: year_params.nic_upper_rate,
                },
            });
        }

        Ok(configs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const BANDS_CSV: &str = r#"tax_year,schedule,ceiling,rate
2024/25,EWNI,37700,0.20
2024/25,EWNI,125140,0.40
2024/25,EWNI,,0.45
2024/25,SCO,2306,0.19
2024/25,SCO,13991,0.20
2024/25,SCO,31092,0.21
2024/25,SCO,62430,0.42
2024/25,SCO,112570,0.45
2024/25,SCO,,0.48
"#;

    const PARAMS_CSV: &str = r#"tax_year,personal_allowance,taper_threshold,nic_primary_threshold,nic_upper_earnings_limit,nic_main_rate,nic_upper_rate
2024/25,12570,100000,12570,50270,0.08,0.02
"#;

    #[test]
    fn parses_band_rows_with_empty_ceiling_as_unbounded() {
        let records = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 9);
        assert_eq!(records[0].ceiling, Some(dec!(37700)));
        assert_eq!(records[2].ceiling, None);
        assert_eq!(records[8].rate, dec!(0.48));
    }

    #[test]
    fn parses_year_parameter_rows() {
        let records = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].personal_allowance, dec!(12570));
        assert_eq!(records[0].nic_main_rate, dec!(0.08));
    }

    #[test]
    fn assembles_one_config_per_year() {
        let bands = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).unwrap();
        let params = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        let configs = TaxTableLoader::assemble(&params, &bands).unwrap();

        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].tax_year, "2024/25");
        assert_eq!(configs[0].schedules.england_wales_ni.bands().len(), 3);
        assert_eq!(configs[0].schedules.scotland.bands().len(), 6);
    }

    #[test]
    fn rejects_unknown_schedule_codes() {
        let csv = "tax_year,schedule,ceiling,rate\n2024/25,CYMRU,37700,0.20\n";
        let bands = TaxTableLoader::parse_bands(csv.as_bytes()).unwrap();
        let params = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        let result = TaxTableLoader::assemble(&params, &bands);

        assert!(matches!(
            result,
            Err(TaxTableLoaderError::InvalidScheduleCode(code)) if code == "CYMRU"
        ));
    }

    #[test]
    fn rejects_band_rows_without_a_parameter_row() {
        let bands = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).unwrap();

        let result = TaxTableLoader::assemble(&[], &bands);

        assert!(matches!(
            result,
            Err(TaxTableLoaderError::MissingYearParams(year)) if year == "2024/25"
        ));
    }

    #[test]
    fn rejects_a_year_missing_one_variant() {
        let csv = "tax_year,schedule,ceiling,rate\n2024/25,EWNI,37700,0.20\n2024/25,EWNI,,0.45\n";
        let bands = TaxTableLoader::parse_bands(csv.as_bytes()).unwrap();
        let params = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        let result = TaxTableLoader::assemble(&params, &bands);

        assert!(matches!(
            result,
            Err(TaxTableLoaderError::MissingSchedule(year, "SCO")) if year == "2024/25"
        ));
    }

    #[test]
    fn rejects_out_of_order_ceilings() {
        let csv = "tax_year,schedule,ceiling,rate\n\
                   2024/25,EWNI,125140,0.40\n\
                   2024/25,EWNI,37700,0.20\n\
                   2024/25,EWNI,,0.45\n\
                   2024/25,SCO,2306,0.19\n\
                   2024/25,SCO,,0.48\n";
        let bands = TaxTableLoader::parse_bands(csv.as_bytes()).unwrap();
        let params = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        let result = TaxTableLoader::assemble(&params, &bands);

        assert!(matches!(
            result,
            Err(TaxTableLoaderError::InvalidSchedule(_, _))
        ));
    }

    #[test]
    fn rejects_a_schedule_without_an_unbounded_band() {
        let csv = "tax_year,schedule,ceiling,rate\n\
                   2024/25,EWNI,37700,0.20\n\
                   2024/25,SCO,2306,0.19\n\
                   2024/25,SCO,,0.48\n";
        let bands = TaxTableLoader::parse_bands(csv.as_bytes()).unwrap();
        let params = TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).unwrap();

        let result = TaxTableLoader::assemble(&params, &bands);

        assert!(matches!(
            result,
            Err(TaxTableLoaderError::InvalidSchedule(_, _))
        ));
    }
}

//! Integration tests loading full published tables from CSV files.

use pretty_assertions::assert_eq;

use paye_core::TaxYearRegistry;
use paye_data::TaxTableLoader;

const BANDS_CSV: &str = include_str!("../test-data/band_schedules.csv");
const PARAMS_CSV: &str = include_str!("../test-data/year_params.csv");

#[test]
fn loads_two_years_of_tables() {
    let bands = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).expect("Failed to parse bands");
    let params =
        TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).expect("Failed to parse params");

    let configs = TaxTableLoader::assemble(&params, &bands).expect("Failed to assemble");

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].tax_year, "2023/24");
    assert_eq!(configs[1].tax_year, "2024/25");
}

#[test]
fn csv_tables_match_the_built_in_registry() {
    let bands = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).expect("Failed to parse bands");
    let params =
        TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).expect("Failed to parse params");

    let configs = TaxTableLoader::assemble(&params, &bands).expect("Failed to assemble");

    for config in configs {
        let built_in = TaxYearRegistry::lookup(&config.tax_year).expect("Year not in registry");

        assert_eq!(config, built_in);
    }
}

#[test]
fn scotland_band_counts_differ_across_the_two_years() {
    let bands = TaxTableLoader::parse_bands(BANDS_CSV.as_bytes()).expect("Failed to parse bands");
    let params =
        TaxTableLoader::parse_year_params(PARAMS_CSV.as_bytes()).expect("Failed to parse params");

    let configs = TaxTableLoader::assemble(&params, &bands).expect("Failed to assemble");

    assert_eq!(configs[0].schedules.scotland.bands().len(), 5);
    assert_eq!(configs[1].schedules.scotland.bands().len(), 6);
}

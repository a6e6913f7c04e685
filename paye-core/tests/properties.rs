//! Property tests for the engine's structural invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paye_core::calculations::allowance::tapered_allowance;
use paye_core::calculations::common::pro_rata;
use paye_core::models::{PayRise, PayrollInput, Region, TaxMonth};
use paye_core::{TaxYearRegistry, calculate};

const REGIONS: [Region; 4] = [
    Region::England,
    Region::Scotland,
    Region::Wales,
    Region::NorthernIreland,
];

const TAX_CODES: [&str; 6] = ["1257L", "885L", "K497", "BR", "D0", "not-a-code"];

fn pounds(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn profile_strategy() -> impl Strategy<Value = PayrollInput> {
    (
        0i64..20_000_000,
        0i64..5_000_000,
        0usize..12,
        0u32..=30,
        0i64..2_000_000,
        proptest::option::of((0i64..5_000_000, 0usize..12)),
        0usize..REGIONS.len(),
        0usize..TaxYearRegistry::KNOWN_YEARS.len(),
        0usize..TAX_CODES.len(),
    )
        .prop_map(
            |(
                salary_cents,
                bonus_cents,
                bonus_month,
                pension_percent,
                benefits_cents,
                rise,
                region_index,
                year_index,
                code_index,
            )| {
                PayrollInput {
                    salary: pounds(salary_cents),
                    bonus: pounds(bonus_cents),
                    bonus_month: TaxMonth::ALL[bonus_month],
                    pension_contribution_percent: Decimal::from(pension_percent),
                    bonus_pensionable: bonus_cents % 2 == 0,
                    pensionable_bonus_percent: dec!(50),
                    taxable_benefits: pounds(benefits_cents),
                    // A rise, never a cut: the new salary adds a
                    // non-negative delta to the old one.
                    pay_rise: rise.map(|(delta_cents, month)| PayRise {
                        new_salary: pounds(salary_cents + delta_cents),
                        effective_month: TaxMonth::ALL[month],
                    }),
                    tax_code: TAX_CODES[code_index].to_string(),
                    region: REGIONS[region_index],
                    tax_year: TaxYearRegistry::KNOWN_YEARS[year_index].to_string(),
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn annual_totals_reconcile_with_the_monthly_series(profile in profile_strategy()) {
        let result = calculate(&profile).unwrap();

        prop_assert_eq!(result.months.len(), 12);

        let gross: Decimal = result.months.iter().map(|m| m.gross).sum();
        let tax: Decimal = result.months.iter().map(|m| m.tax).sum();
        let nic: Decimal = result.months.iter().map(|m| m.national_insurance).sum();
        let pension: Decimal = result.months.iter().map(|m| m.pension).sum();
        let take_home: Decimal = result.months.iter().map(|m| m.take_home).sum();

        prop_assert_eq!(gross, result.annual.gross);
        prop_assert_eq!(tax, result.annual.tax);
        prop_assert_eq!(nic, result.annual.national_insurance);
        prop_assert_eq!(pension, result.annual.pension);
        prop_assert_eq!(take_home, result.annual.take_home);
    }

    #[test]
    fn every_month_satisfies_the_take_home_identity(profile in profile_strategy()) {
        let result = calculate(&profile).unwrap();

        for month in &result.months {
            prop_assert_eq!(
                month.gross - month.tax - month.national_insurance - month.pension,
                month.take_home
            );
        }
    }

    #[test]
    fn monthly_deductions_are_never_negative(profile in profile_strategy()) {
        let result = calculate(&profile).unwrap();

        for month in &result.months {
            prop_assert!(month.tax >= Decimal::ZERO);
            prop_assert!(month.national_insurance >= Decimal::ZERO);
            prop_assert!(month.pension >= Decimal::ZERO);
        }
    }

    #[test]
    fn calculation_is_idempotent(profile in profile_strategy()) {
        let first = calculate(&profile).unwrap();
        let second = calculate(&profile).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn nic_is_zero_at_or_below_the_primary_threshold(salary_cents in 0i64..=1_257_000) {
        let input = PayrollInput {
            salary: pounds(salary_cents),
            bonus: dec!(0),
            bonus_month: TaxMonth::April,
            pension_contribution_percent: dec!(0),
            bonus_pensionable: false,
            pensionable_bonus_percent: dec!(0),
            taxable_benefits: dec!(0),
            pay_rise: None,
            tax_code: "1257L".to_string(),
            region: Region::England,
            tax_year: "2024/25".to_string(),
        };

        let result = calculate(&input).unwrap();

        prop_assert_eq!(result.annual.national_insurance, dec!(0));
    }

    #[test]
    fn taper_halves_the_excess(excess_cents in 0i64..2_000_000) {
        let x = pounds(excess_cents);
        let income = dec!(100000) + x + x;

        let allowance = tapered_allowance(dec!(12570), income, dec!(100000));

        prop_assert_eq!(allowance, (dec!(12570) - x).max(Decimal::ZERO));
    }

    #[test]
    fn pay_rise_gross_matches_the_segment_formula(
        salary_cents in 0i64..15_000_000,
        new_salary_cents in 0i64..20_000_000,
        rise_month in 1usize..12,
    ) {
        let salary = pounds(salary_cents);
        let new_salary = pounds(new_salary_cents);
        let input = PayrollInput {
            salary,
            bonus: dec!(0),
            bonus_month: TaxMonth::April,
            pension_contribution_percent: dec!(0),
            bonus_pensionable: false,
            pensionable_bonus_percent: dec!(0),
            taxable_benefits: dec!(0),
            pay_rise: Some(PayRise {
                new_salary,
                effective_month: TaxMonth::ALL[rise_month],
            }),
            tax_code: "1257L".to_string(),
            region: Region::England,
            tax_year: "2024/25".to_string(),
        };

        let result = calculate(&input).unwrap();

        let back_pay = pro_rata(new_salary - salary, rise_month);
        let expected = pro_rata(salary, rise_month)
            + (new_salary - pro_rata(new_salary, rise_month))
            + back_pay;
        prop_assert_eq!(result.annual.gross, expected);
    }
}

#[test]
fn band_ceilings_increase_and_end_unbounded_for_every_year_and_region() {
    for year in TaxYearRegistry::KNOWN_YEARS {
        let config = TaxYearRegistry::lookup(year).unwrap();
        for schedule in [
            &config.schedules.england_wales_ni,
            &config.schedules.scotland,
        ] {
            let bands = schedule.bands();

            assert!(bands.last().unwrap().ceiling.is_none());
            let ceilings: Vec<Decimal> = bands
                .iter()
                .filter_map(|band| band.ceiling)
                .collect();
            assert!(ceilings.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(ceilings.len(), bands.len() - 1);
        }
    }
}

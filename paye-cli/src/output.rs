use anyhow::Result;
use rust_decimal::Decimal;
use tabled::{Table, builder::Builder};

use paye_core::models::PayrollResult;

/// Renders the monthly series, the annual summary and the deduction
/// breakdown as fixed-width tables.
pub fn render_table(result: &PayrollResult) -> String {
    let mut monthly = Builder::default();
    monthly.push_record(["Month", "Gross", "Pension", "Tax", "NIC", "Take-home"]);
    for month in &result.months {
        monthly.push_record([
            month.month.label().to_string(),
            money(month.gross),
            money(month.pension),
            money(month.tax),
            money(month.national_insurance),
            money(month.take_home),
        ]);
    }

    let mut summary = Builder::default();
    summary.push_record(["Field", "Value"]);
    summary.push_record(["Annual gross".to_string(), money(result.annual.gross)]);
    summary.push_record(["Income tax".to_string(), money(result.annual.tax)]);
    summary.push_record([
        "National Insurance".to_string(),
        money(result.annual.national_insurance),
    ]);
    summary.push_record(["Pension".to_string(), money(result.annual.pension)]);
    summary.push_record(["Take-home".to_string(), money(result.annual.take_home)]);
    summary.push_record([
        "Effective tax rate".to_string(),
        format!("{:.2}%", result.annual.effective_tax_rate),
    ]);
    summary.push_record([
        "Personal allowance".to_string(),
        money(result.personal_allowance),
    ]);

    let mut breakdown = Builder::default();
    breakdown.push_record(["Category", "Amount"]);
    for entry in &result.breakdown {
        breakdown.push_record([entry.category.label().to_string(), money(entry.amount)]);
    }

    format!(
        "{}\n\n{}\n\n{}\n",
        Table::from(monthly),
        Table::from(summary),
        Table::from(breakdown)
    )
}

pub fn render_json(result: &PayrollResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use paye_core::calculate;
    use paye_core::models::{PayrollInput, PayrollResult, Region, TaxMonth};

    use super::*;

    fn result() -> PayrollResult {
        let input = PayrollInput {
            salary: dec!(50000),
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

        calculate(&input).unwrap()
    }

    #[test]
    fn table_lists_every_month_and_the_annual_totals() {
        let rendered = render_table(&result());

        assert!(rendered.contains("April"));
        assert!(rendered.contains("March"));
        assert!(rendered.contains("39519.60"));
        assert!(rendered.contains("Effective tax rate"));
        assert!(rendered.contains("20.96%"));
    }

    #[test]
    fn json_round_trips_to_the_same_result() {
        let original = result();

        let rendered = render_json(&original).unwrap();
        let parsed: PayrollResult = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, original);
    }
}

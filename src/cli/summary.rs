use super::{OutputFormat, render, ui};
use crate::core::config::AppConfig;
use crate::core::net_worth::{
    FinancialStatus, calculate_debt_to_asset_ratio, calculate_debt_to_income_ratio,
    calculate_liquid_net_worth, get_financial_status,
};
use crate::core::snapshot::{CashFlow, FinancialSnapshot, month_cash_flow};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use comfy_table::Cell;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub currency: &'static str,
    pub snapshot: FinancialSnapshot,
    pub liquid_net_worth: f64,
    /// Non-finite ratios serialize as `null`.
    pub debt_to_asset_ratio: f64,
    pub debt_to_income_ratio: f64,
    pub status: FinancialStatus,
    pub month: String,
    pub cash_flow: CashFlow,
}

impl SummaryReport {
    pub fn new(config: &AppConfig, snapshot: &FinancialSnapshot, today: NaiveDate) -> Self {
        SummaryReport {
            currency: config.profile.currency.code(),
            snapshot: snapshot.clone(),
            liquid_net_worth: calculate_liquid_net_worth(
                snapshot.liquid_assets,
                snapshot.total_liabilities,
            ),
            debt_to_asset_ratio: calculate_debt_to_asset_ratio(
                snapshot.total_assets,
                snapshot.total_liabilities,
            ),
            debt_to_income_ratio: calculate_debt_to_income_ratio(
                snapshot.total_liabilities,
                snapshot.monthly_income,
            ),
            status: get_financial_status(snapshot.net_worth),
            month: today.format("%Y-%m").to_string(),
            cash_flow: month_cash_flow(config, today.year(), today.month()),
        }
    }

    pub fn display_as_table(&self) -> String {
        let currency = self.currency;
        let s = &self.snapshot;

        let mut totals = ui::new_styled_table();
        totals.set_header(vec![
            ui::header_cell("Metric"),
            ui::header_cell(&format!("Amount ({currency})")),
        ]);
        for (label, value) in [
            ("Total assets", s.total_assets),
            ("  of which liquid", s.liquid_assets),
            ("Receivables", s.total_receivables),
            ("Total liabilities", s.total_liabilities),
            ("Liquid net worth", self.liquid_net_worth),
            ("Monthly income", s.monthly_income),
            ("Monthly installments", s.monthly_installments),
            ("Active subscriptions", s.active_subscriptions),
        ] {
            totals.add_row(vec![Cell::new(label), ui::amount_cell(value)]);
        }
        totals.add_row(vec![
            Cell::new("Debt / assets"),
            Cell::new(ui::format_ratio(self.debt_to_asset_ratio)),
        ]);
        totals.add_row(vec![
            Cell::new("Debt / annual income"),
            Cell::new(ui::format_ratio(self.debt_to_income_ratio)),
        ]);

        let mut by_type = ui::new_styled_table();
        by_type.set_header(vec![
            ui::header_cell("Type"),
            ui::header_cell(&format!("Amount ({currency})")),
        ]);
        for (kind, value) in &s.assets_by_type {
            by_type.add_row(vec![Cell::new(kind.display_name()), ui::amount_cell(*value)]);
        }
        for (kind, value) in &s.liabilities_by_type {
            by_type.add_row(vec![
                Cell::new(format!("{} (debt)", kind.display_name())),
                ui::amount_cell(-*value),
            ]);
        }

        let mut output = format!(
            "Net Worth: {} {}\n{} - {}\n\n",
            ui::style_text(&ui::format_amount(s.net_worth), ui::StyleType::TotalValue),
            ui::style_text(currency, ui::StyleType::TotalLabel),
            ui::style_toned(self.status.label, self.status.tone),
            self.status.description
        );
        output.push_str(&totals.to_string());

        if !s.assets_by_type.is_empty() || !s.liabilities_by_type.is_empty() {
            output.push_str("\n\n");
            output.push_str(&by_type.to_string());
        }

        if s.goals.total_goals > 0 {
            output.push_str(&format!(
                "\n\nGoals: {}/{} completed, average progress {:.0}%",
                s.goals.completed_goals, s.goals.total_goals, s.goals.average_progress
            ));
        }

        output.push_str(&format!(
            "\n\n{} income {} / expense {}",
            ui::style_text(&self.month, ui::StyleType::Subtle),
            ui::format_amount(self.cash_flow.income),
            ui::format_amount(self.cash_flow.expense)
        ));
        output
    }
}

pub fn run(
    config: &AppConfig,
    snapshot: &FinancialSnapshot,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let report = SummaryReport::new(config, snapshot, today);
    println!(
        "{}",
        render(&report, format, SummaryReport::display_as_table)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = r#"
profile:
  salary: 10000
assets:
  - name: "Cash"
    type: liquid
    value: 30000
  - name: "Deposit"
    type: term
    value: 70000
liabilities:
  - name: "Loan"
    type: personal_debt
    current_debt: 20000
goals:
  - name: "Trip"
    target_amount: 1000
    current_amount: 500
"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_summary_report() {
        let config = AppConfig::from_yaml(LEDGER).unwrap();
        let snapshot = FinancialSnapshot::from_ledger(&config);
        let report = SummaryReport::new(&config, &snapshot, today());
        assert_eq!(report.currency, "TRY");
        assert_eq!(report.snapshot.net_worth, 80000.0);
        assert_eq!(report.liquid_net_worth, 10000.0);
        assert_eq!(report.debt_to_asset_ratio, 0.2);
        assert_eq!(report.status.label, "Strong");
        assert_eq!(report.month, "2026-10");

        let table = report.display_as_table();
        assert!(table.contains("80000.00"));
        assert!(table.contains("Term Deposit"));
        assert!(table.contains("Goals: 0/1 completed, average progress 50%"));
    }

    #[test]
    fn test_infinite_ratio_is_null_in_json() {
        let config = AppConfig::from_yaml(
            r#"
liabilities:
  - name: "Card"
    type: credit_card
    current_debt: 500
"#,
        )
        .unwrap();
        let snapshot = FinancialSnapshot::from_ledger(&config);
        let report = SummaryReport::new(&config, &snapshot, today());
        assert!(report.debt_to_asset_ratio.is_infinite());
        assert!(report.display_as_table().contains("∞"));

        let json = render(&report, OutputFormat::Json, SummaryReport::display_as_table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["debt_to_asset_ratio"].is_null());
        assert_eq!(value["status"]["label"], "Caution");
    }
}

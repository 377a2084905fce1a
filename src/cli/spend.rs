use super::{OutputFormat, render, ui};
use crate::core::SafeToSpendMode;
use crate::core::safe_to_spend::{
    SafeToSpendExplanation, calculate_months_covered, get_safe_to_spend_explanation,
    recommend_safe_to_spend_mode,
};
use crate::core::snapshot::{CashFlow, FinancialSnapshot};
use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct SpendReport {
    pub currency: &'static str,
    pub explanation: SafeToSpendExplanation,
    pub recommended_mode: SafeToSpendMode,
    pub monthly_expenses: f64,
    pub months_covered: f64,
}

impl SpendReport {
    /// Uses `mode` when given, otherwise the recommended posture.
    /// Realized expenses drive the coverage estimate; without any, half of
    /// income stands in for them.
    pub fn new(
        snapshot: &FinancialSnapshot,
        mode: Option<SafeToSpendMode>,
        cash_flow: CashFlow,
        currency: &'static str,
    ) -> Self {
        let params = snapshot.safe_to_spend_params();
        let recommended_mode = recommend_safe_to_spend_mode(&params);
        let mode = mode.unwrap_or(recommended_mode);
        debug!(%mode, %recommended_mode, "Selected safe to spend mode");

        let monthly_expenses = if cash_flow.expense > 0.0 {
            cash_flow.expense
        } else {
            snapshot.monthly_income * 0.5
        };

        SpendReport {
            currency,
            explanation: get_safe_to_spend_explanation(&params, mode),
            recommended_mode,
            monthly_expenses,
            months_covered: calculate_months_covered(snapshot.liquid_assets, monthly_expenses),
        }
    }

    pub fn display_as_table(&self) -> String {
        let currency = self.currency;
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Reserved for"),
            ui::header_cell(&format!("Amount ({currency})")),
        ]);
        for reserve in &self.explanation.reserves {
            table.add_row(vec![Cell::new(reserve.label), ui::amount_cell(reserve.amount)]);
        }

        let mut output = format!(
            "Mode: {}\n{}\n\n",
            ui::style_text(self.explanation.mode_label, ui::StyleType::Title),
            self.explanation.description
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text(
                &format!("Safe to Spend ({currency})"),
                ui::StyleType::TotalLabel
            ),
            ui::style_text(
                &ui::format_amount(self.explanation.safe_to_spend),
                ui::StyleType::TotalValue
            )
        ));

        if self.recommended_mode != self.explanation.mode {
            output.push_str(&format!(
                "\nRecommended mode for your situation: {}",
                self.recommended_mode.display_name()
            ));
        }
        output.push_str(&format!(
            "\nLiquid assets cover {:.1} months of expenses ({} per month)",
            self.months_covered,
            ui::format_amount(self.monthly_expenses)
        ));
        output
    }
}

pub fn run(
    snapshot: &FinancialSnapshot,
    mode: Option<SafeToSpendMode>,
    cash_flow: CashFlow,
    currency: &'static str,
    format: OutputFormat,
) -> Result<()> {
    let report = SpendReport::new(snapshot, mode, cash_flow, currency);
    println!(
        "{}",
        render(&report, format, SpendReport::display_as_table)?
    );
    Ok(())
}

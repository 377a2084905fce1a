use super::{OutputFormat, render, ui};
use crate::core::health::{
    HealthScore, ScoreBreakdown, ScoreCategory, calculate_category_scores, get_score_breakdown,
    get_score_category,
};
use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Overall score rounded for display. The tier uses the unrounded value.
    pub score: f64,
    pub scores: HealthScore,
    pub category: ScoreCategory,
    pub breakdown: Vec<ScoreBreakdown>,
}

impl HealthReport {
    pub fn new(snapshot: &FinancialSnapshot) -> Self {
        if !snapshot.has_data() {
            warn!("No financial data recorded, category scores cannot be determined");
        }
        let params = snapshot.health_params();
        let scores = calculate_category_scores(&params);
        HealthReport {
            score: scores.overall.round(),
            category: get_score_category(scores.overall),
            scores,
            breakdown: get_score_breakdown(&params),
        }
    }

    pub fn display_as_table(&self) -> String {
        let mut categories = ui::new_styled_table();
        categories.set_header(vec![ui::header_cell("Category"), ui::header_cell("Score")]);
        for (label, score) in [
            ("Liquidity", self.scores.liquidity),
            ("Debt Management", self.scores.debt_management),
            ("Asset Quality", self.scores.asset_quality),
            ("Installment Management", self.scores.installment_management),
        ] {
            categories.add_row(vec![Cell::new(label), ui::category_score_cell(score)]);
        }

        let mut breakdown = ui::new_styled_table();
        breakdown.set_header(vec![
            ui::header_cell("Factor"),
            ui::header_cell("Points"),
            ui::header_cell("Details"),
        ]);
        for entry in &self.breakdown {
            let mut details = entry.description.clone();
            if let Some(recommendation) = entry.recommendation {
                details.push('\n');
                details.push_str(&ui::style_text(recommendation, ui::StyleType::Subtle));
            }
            breakdown.add_row(vec![
                Cell::new(entry.category).fg(ui::tone_color(entry.tone)),
                ui::points_cell(entry.score, entry.max_score),
                Cell::new(details),
            ]);
        }

        let mut output = format!(
            "Financial Health: {} {}\n{}\n\n",
            ui::style_text(&format!("{:.0}/100", self.score), ui::StyleType::TotalValue),
            ui::style_toned(self.category.label, self.category.tone),
            self.category.description
        );
        output.push_str(&categories.to_string());
        output.push_str("\n\n");
        output.push_str(&breakdown.to_string());
        output
    }
}

pub fn run(snapshot: &FinancialSnapshot, format: OutputFormat) -> Result<()> {
    let report = HealthReport::new(snapshot);
    println!(
        "{}",
        render(&report, format, HealthReport::display_as_table)?
    );
    Ok(())
}

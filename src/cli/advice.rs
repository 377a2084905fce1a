use super::{OutputFormat, render, ui};
use crate::core::health::calculate_health_score;
use crate::core::recommendations::{Recommendation, RecommendationKind, get_recommendations};
use crate::core::snapshot::FinancialSnapshot;
use anyhow::Result;
use comfy_table::{Cell, Color};

fn kind_color(kind: RecommendationKind) -> Color {
    match kind {
        RecommendationKind::Warning => Color::Yellow,
        RecommendationKind::Success => Color::Green,
        RecommendationKind::Info => Color::Magenta,
        RecommendationKind::Action => Color::Blue,
    }
}

/// Recommendations for the snapshot, truncated to `limit` when given.
pub fn recommendations_for(
    snapshot: &FinancialSnapshot,
    limit: Option<usize>,
) -> Vec<Recommendation> {
    let health_score = calculate_health_score(&snapshot.health_params());
    let mut recommendations = get_recommendations(&snapshot.recommendation_params(health_score));
    if let Some(limit) = limit {
        recommendations.truncate(limit);
    }
    recommendations
}

pub fn display_as_table(recommendations: &[Recommendation]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Type"),
        ui::header_cell("Recommendation"),
    ]);
    for (i, recommendation) in recommendations.iter().enumerate() {
        let kind = recommendation.kind;
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(kind.as_str()).fg(kind_color(kind)),
            Cell::new(format!(
                "{}\n{}",
                ui::style_text(recommendation.title, ui::StyleType::TotalLabel),
                recommendation.description
            )),
        ]);
    }
    table.to_string()
}

pub fn run(snapshot: &FinancialSnapshot, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let recommendations = recommendations_for(snapshot, limit);
    println!(
        "{}",
        render(&recommendations, format, |r| display_as_table(r))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_debt_first_then_tips() {
        let snapshot = FinancialSnapshot {
            net_worth: 2000.0,
            total_assets: 10000.0,
            total_liabilities: 8000.0,
            liquid_assets: 10000.0,
            monthly_income: 2000.0,
            ..Default::default()
        };
        let recommendations = recommendations_for(&snapshot, None);
        assert_eq!(recommendations[0].id, "high-debt");
        assert_eq!(recommendations[1].id, "budget-rule");
        assert_eq!(recommendations.len(), 16);
    }

    #[test]
    fn test_rules_see_unrounded_score() {
        let snapshot = FinancialSnapshot {
            net_worth: -500.0,
            total_assets: 10000.0,
            total_liabilities: 10500.0,
            liquid_assets: 3000.0,
            monthly_income: 500.0,
            findeks_score: Some(1800.0),
            ..Default::default()
        };
        let expected = get_recommendations(&snapshot.recommendation_params(39.5));
        assert_eq!(recommendations_for(&snapshot, None), expected);
        assert_eq!(expected[0].id, "high-debt");
    }

    #[test]
    fn test_limit() {
        let recommendations = recommendations_for(&FinancialSnapshot::default(), Some(3));
        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].id, "emergency-fund");
        let table = display_as_table(&recommendations);
        assert!(table.contains("Build an Emergency Fund"));
    }
}

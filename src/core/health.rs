//! Financial health scoring.
//!
//! The overall score is a sum of seven independent factor contributions,
//! clamped to `[0, 100]`. Category scores are a separate decomposition on a
//! 0-100 scale each, and the breakdown is a user facing explanation of four
//! of the factors. Neither is a sub-total of the overall score.
use super::tone::Tone;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HealthParams {
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub liquid_assets: f64,
    pub monthly_installments: f64,
    pub monthly_income: f64,
    /// Credit bureau score (300-1900). `None`, zero and NaN all mean "not provided".
    pub findeks_score: Option<f64>,
}

/// A category sub-score, or `Unknown` when there is no data to judge it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryScore {
    Known(f64),
    Unknown,
}

impl CategoryScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            CategoryScore::Known(v) => Some(*v),
            CategoryScore::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CategoryScore::Unknown)
    }

    /// Legacy encoding where `-1` stands for unknown.
    pub fn as_sentinel(&self) -> f64 {
        self.value().unwrap_or(-1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthScore {
    pub overall: f64,
    pub liquidity: CategoryScore,
    pub debt_management: CategoryScore,
    pub asset_quality: CategoryScore,
    pub installment_management: CategoryScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub category: &'static str,
    pub score: i32,
    pub max_score: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCategory {
    pub label: &'static str,
    pub tone: Tone,
    pub description: &'static str,
}

// Half rounds towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn provided_findeks(score: Option<f64>) -> Option<f64> {
    score.filter(|s| *s != 0.0 && !s.is_nan())
}

fn debt_to_asset_points(ratio: f64) -> i32 {
    if ratio < 0.3 {
        15
    } else if ratio < 0.5 {
        10
    } else if ratio < 0.7 {
        5
    } else {
        -10
    }
}

fn installment_burden_points(burden: f64) -> i32 {
    if burden < 0.2 {
        10
    } else if burden < 0.3 {
        7
    } else if burden < 0.4 {
        4
    } else {
        -5
    }
}

fn liquidity_points(ratio: f64) -> i32 {
    if ratio > 1.0 {
        10
    } else if ratio > 0.5 {
        7
    } else if ratio > 0.3 {
        4
    } else {
        -5
    }
}

/// Seven-factor score in `[0, 100]`.
pub fn calculate_health_score(params: &HealthParams) -> f64 {
    let mut score = 0.0;

    if params.net_worth > 0.0 {
        score += 20.0;
    } else if params.net_worth < 0.0 {
        score -= (params.net_worth.abs() / 1000.0).min(20.0);
    }

    let debt_to_asset = if params.total_assets > 0.0 {
        params.total_liabilities / params.total_assets
    } else {
        1.0
    };
    score += f64::from(debt_to_asset_points(debt_to_asset));

    let debt_to_income = if params.monthly_income > 0.0 {
        params.total_liabilities / (params.monthly_income * 12.0)
    } else {
        999.0
    };
    score += if debt_to_income < 2.0 {
        15.0
    } else if debt_to_income < 3.0 {
        10.0
    } else if debt_to_income < 5.0 {
        5.0
    } else {
        -10.0
    };

    let installment_burden = if params.monthly_income > 0.0 {
        params.monthly_installments / params.monthly_income
    } else {
        1.0
    };
    score += f64::from(installment_burden_points(installment_burden));

    let liquidity_ratio = if params.total_liabilities > 0.0 {
        params.liquid_assets / params.total_liabilities
    } else if params.liquid_assets > 0.0 {
        2.0
    } else {
        0.0
    };
    score += f64::from(liquidity_points(liquidity_ratio));

    score += match provided_findeks(params.findeks_score) {
        Some(s) if s >= 1700.0 => 15.0,
        Some(s) if s >= 1500.0 => 10.0,
        Some(s) if s >= 1300.0 => 5.0,
        Some(s) if s < 1100.0 => -10.0,
        Some(_) => 0.0,
        None => 5.0,
    };

    let emergency_fund_months = if params.monthly_income > 0.0 {
        params.liquid_assets / params.monthly_income
    } else {
        0.0
    };
    score += if emergency_fund_months >= 6.0 {
        15.0
    } else if emergency_fund_months >= 3.0 {
        10.0
    } else if emergency_fund_months >= 1.0 {
        5.0
    } else {
        -5.0
    };

    debug!(
        raw_score = score,
        debt_to_asset, debt_to_income, installment_burden, liquidity_ratio, emergency_fund_months,
        "Computed health score factors"
    );
    score.clamp(0.0, 100.0)
}

/// Four independent category scores plus the overall score.
///
/// A category is `Unknown` only when both quantities that define it are zero.
/// `overall` is not rounded here.
pub fn calculate_category_scores(params: &HealthParams) -> HealthScore {
    let liquidity = if params.total_liabilities > 0.0 {
        CategoryScore::Known((params.liquid_assets / params.total_liabilities * 100.0).min(100.0))
    } else if params.liquid_assets > 0.0 {
        CategoryScore::Known(100.0)
    } else {
        CategoryScore::Unknown
    };

    let debt_management = if params.total_assets > 0.0 {
        CategoryScore::Known(
            (100.0 - params.total_liabilities / params.total_assets * 100.0).max(0.0),
        )
    } else if params.total_liabilities > 0.0 {
        CategoryScore::Known(0.0)
    } else {
        CategoryScore::Unknown
    };

    let asset_quality = if params.total_assets == 0.0 && params.total_liabilities == 0.0 {
        CategoryScore::Unknown
    } else if params.net_worth > 0.0 {
        CategoryScore::Known((params.net_worth / 10000.0 * 100.0).min(100.0))
    } else {
        CategoryScore::Known(0.0)
    };

    let installment_management = if params.monthly_income > 0.0 {
        CategoryScore::Known(
            (100.0 - params.monthly_installments / params.monthly_income * 100.0).max(0.0),
        )
    } else if params.monthly_installments > 0.0 {
        CategoryScore::Known(0.0)
    } else {
        CategoryScore::Unknown
    };

    let round = |score: CategoryScore| match score {
        CategoryScore::Known(v) => CategoryScore::Known(round_half_up(v)),
        CategoryScore::Unknown => CategoryScore::Unknown,
    };

    HealthScore {
        overall: calculate_health_score(params),
        liquidity: round(liquidity),
        debt_management: round(debt_management),
        asset_quality: round(asset_quality),
        installment_management: round(installment_management),
    }
}

/// Explains the net worth, debt ratio, liquidity and installment factors.
/// The points shown here are not meant to add up to the overall score.
pub fn get_score_breakdown(params: &HealthParams) -> Vec<ScoreBreakdown> {
    let mut breakdown = Vec::with_capacity(4);

    let positive_net_worth = params.net_worth > 0.0;
    breakdown.push(ScoreBreakdown {
        category: "Net Worth",
        score: if positive_net_worth {
            20
        } else if params.net_worth < 0.0 {
            -20
        } else {
            0
        },
        max_score: 20,
        description: if positive_net_worth {
            "You have a positive net worth".to_string()
        } else {
            "Negative net worth: your assets do not cover your debts".to_string()
        },
        recommendation: (params.net_worth < 0.0)
            .then_some("Focus on reducing your debts urgently"),
        tone: if positive_net_worth {
            Tone::Positive
        } else {
            Tone::Critical
        },
    });

    let debt_ratio = if params.total_assets > 0.0 {
        params.total_liabilities / params.total_assets
    } else {
        1.0
    };
    breakdown.push(ScoreBreakdown {
        category: "Debt Ratio",
        score: debt_to_asset_points(debt_ratio),
        max_score: 15,
        description: format!(
            "Your debts amount to {:.1}% of your assets",
            debt_ratio * 100.0
        ),
        recommendation: (debt_ratio > 0.5)
            .then_some("Your debt ratio is high. Avoid taking on new debt"),
        tone: if debt_ratio < 0.5 {
            Tone::Positive
        } else {
            Tone::Caution
        },
    });

    let liquidity_ratio = if params.total_liabilities > 0.0 {
        params.liquid_assets / params.total_liabilities
    } else {
        2.0
    };
    breakdown.push(ScoreBreakdown {
        category: "Liquidity",
        score: liquidity_points(liquidity_ratio),
        max_score: 10,
        description: format!(
            "Your liquid assets cover {:.0}% of your debts",
            liquidity_ratio * 100.0
        ),
        recommendation: (liquidity_ratio < 0.5)
            .then_some("Prioritise building an emergency fund"),
        tone: if liquidity_ratio > 0.5 {
            Tone::Positive
        } else {
            Tone::Critical
        },
    });

    let installment_burden = if params.monthly_income > 0.0 {
        params.monthly_installments / params.monthly_income
    } else {
        0.0
    };
    breakdown.push(ScoreBreakdown {
        category: "Installment Burden",
        score: installment_burden_points(installment_burden),
        max_score: 10,
        description: format!(
            "Your monthly installments take {:.0}% of your income",
            installment_burden * 100.0
        ),
        recommendation: (installment_burden > 0.3)
            .then_some("Your installment load is high. Avoid new installment purchases"),
        tone: if installment_burden < 0.3 {
            Tone::Positive
        } else {
            Tone::Caution
        },
    });

    breakdown
}

/// Tier for an overall score, with breakpoints at 80, 60 and 40.
pub fn get_score_category(score: f64) -> ScoreCategory {
    if score >= 80.0 {
        return ScoreCategory {
            label: "Excellent",
            tone: Tone::Positive,
            description: "Your financial health is in very good shape",
        };
    }
    if score >= 60.0 {
        return ScoreCategory {
            label: "Good",
            tone: Tone::Info,
            description: "Your financial health is at a good level",
        };
    }
    if score >= 40.0 {
        return ScoreCategory {
            label: "Average",
            tone: Tone::Caution,
            description: "Work on improving your financial health",
        };
    }
    ScoreCategory {
        label: "Needs Attention",
        tone: Tone::Critical,
        description: "Your financial health is at risk",
    }
}

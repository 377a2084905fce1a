//! Discretionary spending ceilings under three reserve postures.
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeToSpendParams {
    pub liquid_assets: f64,
    pub total_liabilities: f64,
    pub monthly_installments: f64,
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SafeToSpendMode {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

impl From<&str> for SafeToSpendMode {
    /// Unrecognized names fall back to `Balanced`.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "conservative" => SafeToSpendMode::Conservative,
            "aggressive" => SafeToSpendMode::Aggressive,
            _ => SafeToSpendMode::Balanced,
        }
    }
}

impl From<String> for SafeToSpendMode {
    fn from(s: String) -> Self {
        SafeToSpendMode::from(s.as_str())
    }
}

impl SafeToSpendMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SafeToSpendMode::Conservative => "Conservative",
            SafeToSpendMode::Balanced => "Balanced",
            SafeToSpendMode::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for SafeToSpendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SafeToSpendMode::Conservative => "conservative",
            SafeToSpendMode::Balanced => "balanced",
            SafeToSpendMode::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReserveItem {
    pub label: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafeToSpendExplanation {
    pub mode: SafeToSpendMode,
    pub mode_label: &'static str,
    pub reserves: Vec<ReserveItem>,
    pub safe_to_spend: f64,
    pub description: &'static str,
}

fn reserve_items(params: &SafeToSpendParams, mode: SafeToSpendMode) -> Vec<ReserveItem> {
    match mode {
        SafeToSpendMode::Conservative => vec![
            ReserveItem {
                label: "All debts",
                amount: params.total_liabilities,
            },
            ReserveItem {
                label: "3-month emergency fund",
                amount: params.monthly_income * 3.0,
            },
            ReserveItem {
                label: "3 months of installments",
                amount: params.monthly_installments * 3.0,
            },
        ],
        SafeToSpendMode::Balanced => vec![
            ReserveItem {
                label: "1.5-month emergency fund",
                amount: params.monthly_income * 1.5,
            },
            ReserveItem {
                label: "This month's installments",
                amount: params.monthly_installments,
            },
        ],
        SafeToSpendMode::Aggressive => vec![ReserveItem {
            label: "This month's installments",
            amount: params.monthly_installments,
        }],
    }
}

fn spendable_after(liquid_assets: f64, reserved: f64) -> f64 {
    (liquid_assets - reserved).max(0.0)
}

/// Reserves all debt, a 3-month emergency fund and 3 months of installments.
pub fn safe_to_spend_conservative(params: &SafeToSpendParams) -> f64 {
    let emergency_fund = params.monthly_income * 3.0;
    let future_installments = params.monthly_installments * 3.0;
    let reserved = params.total_liabilities + emergency_fund + future_installments;
    spendable_after(params.liquid_assets, reserved)
}

/// Reserves a 1.5-month emergency fund and this month's installments.
pub fn safe_to_spend_balanced(params: &SafeToSpendParams) -> f64 {
    let emergency_fund = params.monthly_income * 1.5;
    let reserved = emergency_fund + params.monthly_installments;
    spendable_after(params.liquid_assets, reserved)
}

/// Reserves only this month's installments.
pub fn safe_to_spend_aggressive(params: &SafeToSpendParams) -> f64 {
    spendable_after(params.liquid_assets, params.monthly_installments)
}

pub fn calculate_safe_to_spend(params: &SafeToSpendParams, mode: SafeToSpendMode) -> f64 {
    let amount = match mode {
        SafeToSpendMode::Conservative => safe_to_spend_conservative(params),
        SafeToSpendMode::Balanced => safe_to_spend_balanced(params),
        SafeToSpendMode::Aggressive => safe_to_spend_aggressive(params),
    };
    debug!(%mode, amount, "Calculated safe to spend");
    amount
}

/// Decomposes the reserve used by `mode` into labelled line items.
pub fn get_safe_to_spend_explanation(
    params: &SafeToSpendParams,
    mode: SafeToSpendMode,
) -> SafeToSpendExplanation {
    let description = match mode {
        SafeToSpendMode::Conservative => {
            "Safest option. All debts, a 3-month emergency fund and the next 3 months of installments are reserved."
        }
        SafeToSpendMode::Balanced => {
            "Balanced approach. A 1.5-month emergency fund and this month's installments are reserved."
        }
        SafeToSpendMode::Aggressive => {
            "Risk-taking approach. Only this month's mandatory payments are reserved."
        }
    };

    SafeToSpendExplanation {
        mode,
        mode_label: mode.display_name(),
        reserves: reserve_items(params, mode),
        safe_to_spend: calculate_safe_to_spend(params, mode),
        description,
    }
}

/// Months of `monthly_expenses` that `liquid_assets` can cover; 0 when
/// expenses are not positive.
pub fn calculate_months_covered(liquid_assets: f64, monthly_expenses: f64) -> f64 {
    if monthly_expenses <= 0.0 {
        return 0.0;
    }
    liquid_assets / monthly_expenses
}

/// Picks a posture from the shape of the user's finances. Conservative
/// triggers are checked before the aggressive one.
pub fn recommend_safe_to_spend_mode(params: &SafeToSpendParams) -> SafeToSpendMode {
    let debt_ratio = if params.liquid_assets > 0.0 {
        params.total_liabilities / params.liquid_assets
    } else {
        999.0
    };
    let installment_burden = if params.monthly_income > 0.0 {
        params.monthly_installments / params.monthly_income
    } else {
        1.0
    };
    let emergency_fund_months = if params.monthly_income > 0.0 {
        params.liquid_assets / params.monthly_income
    } else {
        0.0
    };
    debug!(
        debt_ratio,
        installment_burden, emergency_fund_months, "Recommending safe to spend mode"
    );

    if debt_ratio > 2.0 || installment_burden > 0.4 {
        return SafeToSpendMode::Conservative;
    }

    if emergency_fund_months < 2.0 {
        return SafeToSpendMode::Conservative;
    }

    if debt_ratio < 0.5 && installment_burden < 0.2 && emergency_fund_months > 6.0 {
        return SafeToSpendMode::Aggressive;
    }

    SafeToSpendMode::Balanced
}

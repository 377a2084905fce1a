//! Net worth and the debt ratios derived from aggregate totals.
use super::tone::Tone;
use serde::Serialize;

/// Assets plus money owed to the user, minus what the user owes.
pub fn calculate_net_worth(
    total_assets: f64,
    total_liabilities: f64,
    total_receivables: f64,
) -> f64 {
    total_assets + total_receivables - total_liabilities
}

/// Net worth counting only immediately spendable assets.
pub fn calculate_liquid_net_worth(liquid_assets: f64, total_liabilities: f64) -> f64 {
    liquid_assets - total_liabilities
}

/// Liabilities over assets.
///
/// With no assets the ratio is unbounded (`f64::INFINITY`) when there is any
/// debt and `0.0` otherwise. Callers must handle the infinite case before
/// formatting.
pub fn calculate_debt_to_asset_ratio(total_assets: f64, total_liabilities: f64) -> f64 {
    if total_assets == 0.0 {
        return if total_liabilities > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
    }
    total_liabilities / total_assets
}

/// Liabilities over annual income (`monthly_income * 12`), with the same
/// zero-denominator policy as [`calculate_debt_to_asset_ratio`].
pub fn calculate_debt_to_income_ratio(total_liabilities: f64, monthly_income: f64) -> f64 {
    let annual_income = monthly_income * 12.0;
    if annual_income == 0.0 {
        return if total_liabilities > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
    }
    total_liabilities / annual_income
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStatus {
    pub status: StatusKind,
    pub label: &'static str,
    pub tone: Tone,
    pub description: &'static str,
}

/// Classifies net worth into five tiers at the absolute breakpoints
/// 10000, 0 and -10000.
pub fn get_financial_status(net_worth: f64) -> FinancialStatus {
    if net_worth > 10000.0 {
        return FinancialStatus {
            status: StatusKind::Positive,
            label: "Strong",
            tone: Tone::Positive,
            description: "Your net worth is in a strong position",
        };
    }

    if net_worth > 0.0 {
        return FinancialStatus {
            status: StatusKind::Positive,
            label: "Positive",
            tone: Tone::Info,
            description: "Your net worth is positive",
        };
    }

    if net_worth == 0.0 {
        return FinancialStatus {
            status: StatusKind::Neutral,
            label: "Balanced",
            tone: Tone::Caution,
            description: "Your assets and debts are in balance",
        };
    }

    if net_worth > -10000.0 {
        return FinancialStatus {
            status: StatusKind::Negative,
            label: "Caution",
            tone: Tone::Caution,
            description: "Your net worth is negative, prioritise paying down debt",
        };
    }

    FinancialStatus {
        status: StatusKind::Negative,
        label: "Risk",
        tone: Tone::Critical,
        description: "Your net worth is seriously negative, act urgently",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_worth_counts_receivables() {
        assert_eq!(calculate_net_worth(50000.0, 20000.0, 5000.0), 35000.0);
        assert_eq!(calculate_net_worth(1000.0, 3000.0, 0.0), -2000.0);
        for (a, l, r) in [(0.0, 0.0, 0.0), (12.5, 7.25, 3.0), (1e9, 1.0, 1e6)] {
            assert_eq!(calculate_net_worth(a, l, r), a + r - l);
        }
    }

    #[test]
    fn test_liquid_net_worth() {
        assert_eq!(calculate_liquid_net_worth(8000.0, 10000.0), -2000.0);
    }

    #[test]
    fn test_debt_to_asset_ratio_zero_assets() {
        assert_eq!(calculate_debt_to_asset_ratio(0.0, 5000.0), f64::INFINITY);
        assert_eq!(calculate_debt_to_asset_ratio(0.0, 0.0), 0.0);
        assert_eq!(calculate_debt_to_asset_ratio(10000.0, 2500.0), 0.25);
    }

    #[test]
    fn test_debt_to_income_ratio_is_annualized() {
        assert_eq!(calculate_debt_to_income_ratio(120000.0, 10000.0), 1.0);
        assert_eq!(calculate_debt_to_income_ratio(1.0, 0.0), f64::INFINITY);
        assert_eq!(calculate_debt_to_income_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_financial_status_breakpoints() {
        assert_eq!(get_financial_status(10000.01).label, "Strong");
        assert_eq!(get_financial_status(10000.0).label, "Positive");
        assert_eq!(get_financial_status(0.01).label, "Positive");
        assert_eq!(get_financial_status(0.0).status, StatusKind::Neutral);
        assert_eq!(get_financial_status(-0.01).label, "Caution");
        assert_eq!(get_financial_status(-9999.99).label, "Caution");
        assert_eq!(get_financial_status(-10000.0).label, "Risk");
        assert_eq!(get_financial_status(-10000.0).tone, Tone::Critical);
    }
}

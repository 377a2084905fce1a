//! Aggregates ledger records into the scalar totals the calculators work on.
use super::config::AppConfig;
use super::health::HealthParams;
use super::net_worth::calculate_net_worth;
use super::records::{AssetType, LiabilityType, TransactionType};
use super::recommendations::RecommendationParams;
use super::safe_to_spend::SafeToSpendParams;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GoalsProgress {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub average_progress: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CashFlow {
    pub income: f64,
    pub expense: f64,
}

/// Totals of a ledger at one point in time. Amounts are summed as given,
/// regardless of their currency tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialSnapshot {
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_receivables: f64,
    pub liquid_assets: f64,
    pub monthly_installments: f64,
    pub monthly_income: f64,
    pub findeks_score: Option<f64>,
    pub assets_by_type: BTreeMap<AssetType, f64>,
    pub liabilities_by_type: BTreeMap<LiabilityType, f64>,
    pub active_subscriptions: f64,
    pub goals: GoalsProgress,
}

impl FinancialSnapshot {
    pub fn from_ledger(config: &AppConfig) -> Self {
        let mut snapshot = FinancialSnapshot {
            monthly_income: config.profile.monthly_income(),
            findeks_score: config.profile.findeks_score,
            ..Default::default()
        };

        for asset in &config.assets {
            snapshot.total_assets += asset.value;
            if asset.kind.is_liquid() {
                snapshot.liquid_assets += asset.value;
            }
            *snapshot.assets_by_type.entry(asset.kind).or_default() += asset.value;
        }

        for liability in &config.liabilities {
            snapshot.total_liabilities += liability.current_debt;
            *snapshot
                .liabilities_by_type
                .entry(liability.kind)
                .or_default() += liability.current_debt;
        }

        snapshot.total_receivables = config.receivables.iter().map(|r| r.amount).sum();
        snapshot.monthly_installments = config
            .installments
            .iter()
            .map(|i| i.installment_amount)
            .sum();
        snapshot.active_subscriptions = config
            .subscriptions
            .iter()
            .filter(|s| s.active)
            .map(|s| s.price)
            .sum();

        let total_goals = config.goals.len();
        snapshot.goals = GoalsProgress {
            total_goals,
            completed_goals: config.goals.iter().filter(|g| g.is_completed()).count(),
            average_progress: if total_goals > 0 {
                config.goals.iter().map(|g| g.progress()).sum::<f64>() / total_goals as f64
            } else {
                0.0
            },
        };

        snapshot.net_worth = calculate_net_worth(
            snapshot.total_assets,
            snapshot.total_liabilities,
            snapshot.total_receivables,
        );
        debug!(?snapshot, "Aggregated ledger");
        snapshot
    }

    /// True when there is anything at all to score.
    pub fn has_data(&self) -> bool {
        self.total_assets > 0.0
            || self.total_liabilities > 0.0
            || self.monthly_income > 0.0
            || self.total_receivables > 0.0
            || self.monthly_installments > 0.0
    }

    pub fn health_params(&self) -> HealthParams {
        HealthParams {
            net_worth: self.net_worth,
            total_assets: self.total_assets,
            total_liabilities: self.total_liabilities,
            liquid_assets: self.liquid_assets,
            monthly_installments: self.monthly_installments,
            monthly_income: self.monthly_income,
            findeks_score: self.findeks_score,
        }
    }

    pub fn safe_to_spend_params(&self) -> SafeToSpendParams {
        SafeToSpendParams {
            liquid_assets: self.liquid_assets,
            total_liabilities: self.total_liabilities,
            monthly_installments: self.monthly_installments,
            monthly_income: self.monthly_income,
        }
    }

    pub fn recommendation_params(&self, health_score: f64) -> RecommendationParams {
        RecommendationParams {
            total_assets: self.total_assets,
            total_liabilities: self.total_liabilities,
            liquid_assets: self.liquid_assets,
            monthly_income: self.monthly_income,
            monthly_installments: self.monthly_installments,
            health_score,
        }
    }
}

/// Realized income and expense for the given calendar month. Expense includes
/// active subscriptions. Transactions with unparseable dates are skipped.
pub fn month_cash_flow(config: &AppConfig, year: i32, month: u32) -> CashFlow {
    let mut flow = CashFlow {
        income: 0.0,
        expense: config
            .subscriptions
            .iter()
            .filter(|s| s.active)
            .map(|s| s.price)
            .sum(),
    };

    for transaction in &config.transactions {
        let Ok(date) = NaiveDate::parse_from_str(&transaction.date, "%Y-%m-%d") else {
            debug!(date = %transaction.date, "Skipping transaction with invalid date");
            continue;
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        match transaction.kind {
            TransactionType::Income => flow.income += transaction.amount,
            TransactionType::Expense => flow.expense += transaction.amount,
        }
    }
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{
        Asset, Currency, Goal, Installment, Liability, Profile, Receivable, Subscription,
        Transaction,
    };

    fn asset(kind: AssetType, value: f64) -> Asset {
        Asset {
            name: format!("{kind:?}"),
            kind,
            value,
            currency: Currency::Try,
            details: None,
        }
    }

    fn liability(kind: LiabilityType, current_debt: f64) -> Liability {
        Liability {
            name: format!("{kind:?}"),
            kind,
            current_debt,
            total_limit: None,
            due_date: None,
            debtor_name: None,
            apr: None,
            min_payment: None,
            currency: Currency::Try,
            details: None,
        }
    }

    fn transaction(kind: TransactionType, amount: f64, date: &str) -> Transaction {
        Transaction {
            kind,
            category: "other".to_string(),
            amount,
            currency: Currency::Try,
            description: String::new(),
            date: date.to_string(),
        }
    }

    fn ledger() -> AppConfig {
        AppConfig {
            profile: Profile {
                salary: Some(30000.0),
                additional_income: Some(5000.0),
                findeks_score: Some(1550.0),
                ..Default::default()
            },
            assets: vec![
                asset(AssetType::Liquid, 20000.0),
                asset(AssetType::GoldCurrency, 15000.0),
                asset(AssetType::Term, 50000.0),
                asset(AssetType::Funds, 10000.0),
                asset(AssetType::Liquid, 5000.0),
            ],
            liabilities: vec![
                liability(LiabilityType::CreditCard, 8000.0),
                liability(LiabilityType::CreditCard, 2000.0),
            ],
            receivables: vec![Receivable {
                debtor: "Ayse".to_string(),
                amount: 3000.0,
                due_date: "2026-12-01".to_string(),
                status: None,
                currency: Currency::Try,
                details: None,
            }],
            installments: vec![Installment {
                name: "Laptop".to_string(),
                installment_amount: 2500.0,
                remaining_months: 6.0,
                payment_day: 10,
                end_date: "2027-04-10".to_string(),
                total_amount: None,
                category: None,
                currency: Currency::Try,
                details: None,
            }],
            subscriptions: vec![
                Subscription {
                    name: "Music".to_string(),
                    price: 60.0,
                    currency: Currency::Try,
                    renewal_day: 3,
                    category: None,
                    active: true,
                },
                Subscription {
                    name: "Old gym".to_string(),
                    price: 900.0,
                    currency: Currency::Try,
                    renewal_day: 1,
                    category: None,
                    active: false,
                },
            ],
            goals: vec![
                Goal {
                    name: "Holiday".to_string(),
                    target_amount: 20000.0,
                    current_amount: 20000.0,
                    deadline: None,
                    currency: Currency::Try,
                },
                Goal {
                    name: "Car".to_string(),
                    target_amount: 400000.0,
                    current_amount: 100000.0,
                    deadline: None,
                    currency: Currency::Try,
                },
            ],
            transactions: vec![
                transaction(TransactionType::Income, 35000.0, "2026-10-01"),
                transaction(TransactionType::Expense, 1200.0, "2026-10-03"),
                transaction(TransactionType::Expense, 800.0, "2026-09-28"),
                transaction(TransactionType::Income, 500.0, "2025-10-15"),
            ],
            safe_to_spend_mode: None,
        }
    }

    #[test]
    fn test_totals() {
        let snapshot = FinancialSnapshot::from_ledger(&ledger());
        assert_eq!(snapshot.total_assets, 100000.0);
        assert_eq!(snapshot.liquid_assets, 40000.0);
        assert_eq!(snapshot.total_liabilities, 10000.0);
        assert_eq!(snapshot.total_receivables, 3000.0);
        assert_eq!(snapshot.monthly_installments, 2500.0);
        assert_eq!(snapshot.monthly_income, 35000.0);
        assert_eq!(snapshot.net_worth, 93000.0);
        assert_eq!(snapshot.active_subscriptions, 60.0);
        assert_eq!(snapshot.findeks_score, Some(1550.0));
        assert!(snapshot.has_data());
    }

    #[test]
    fn test_totals_by_type() {
        let snapshot = FinancialSnapshot::from_ledger(&ledger());
        let assets: Vec<_> = snapshot.assets_by_type.into_iter().collect();
        assert_eq!(
            assets,
            [
                (AssetType::Liquid, 25000.0),
                (AssetType::Term, 50000.0),
                (AssetType::GoldCurrency, 15000.0),
                (AssetType::Funds, 10000.0),
            ]
        );
        assert_eq!(snapshot.liabilities_by_type.len(), 1);
        assert_eq!(
            snapshot.liabilities_by_type[&LiabilityType::CreditCard],
            10000.0
        );
    }

    #[test]
    fn test_goals_progress() {
        let snapshot = FinancialSnapshot::from_ledger(&ledger());
        assert_eq!(snapshot.goals.total_goals, 2);
        assert_eq!(snapshot.goals.completed_goals, 1);
        assert_eq!(snapshot.goals.average_progress, 62.5);

        let empty = FinancialSnapshot::from_ledger(&AppConfig::default());
        assert_eq!(empty.goals, GoalsProgress::default());
        assert!(!empty.has_data());
    }

    #[test]
    fn test_projections_carry_the_same_numbers() {
        let snapshot = FinancialSnapshot::from_ledger(&ledger());
        let health = snapshot.health_params();
        assert_eq!(health.net_worth, snapshot.net_worth);
        assert_eq!(health.findeks_score, Some(1550.0));
        let spend = snapshot.safe_to_spend_params();
        assert_eq!(spend.liquid_assets, 40000.0);
        assert_eq!(spend.monthly_installments, 2500.0);
        let advice = snapshot.recommendation_params(72.0);
        assert_eq!(advice.health_score, 72.0);
        assert_eq!(advice.total_assets, 100000.0);
    }

    #[test]
    fn test_month_cash_flow() {
        let flow = month_cash_flow(&ledger(), 2026, 10);
        assert_eq!(flow.income, 35000.0);
        assert_eq!(flow.expense, 1260.0);

        let flow = month_cash_flow(&ledger(), 2026, 9);
        assert_eq!(flow, CashFlow { income: 0.0, expense: 860.0 });
    }
}

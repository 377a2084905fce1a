//! Raw financial records as they appear in the ledger file.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Try,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Liquid,
    Term,
    GoldCurrency,
    Funds,
}

impl AssetType {
    /// Cash-like holdings count as liquid, term deposits and funds do not.
    pub fn is_liquid(&self) -> bool {
        matches!(self, AssetType::Liquid | AssetType::GoldCurrency)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetType::Liquid => "Cash",
            AssetType::Term => "Term Deposit",
            AssetType::GoldCurrency => "Gold & Currency",
            AssetType::Funds => "Funds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityType {
    CreditCard,
    PersonalDebt,
}

impl LiabilityType {
    pub fn display_name(&self) -> &'static str {
        match self {
            LiabilityType::CreditCard => "Credit Card",
            LiabilityType::PersonalDebt => "Personal Debt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub value: f64,
    #[serde(default)]
    pub currency: Currency,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LiabilityType,
    pub current_debt: f64,
    pub total_limit: Option<f64>,
    pub due_date: Option<String>,
    pub debtor_name: Option<String>,
    /// Annual percentage rate.
    pub apr: Option<f64>,
    pub min_payment: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    Pending,
    Partial,
    Collected,
}

impl ReceivableStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReceivableStatus::Pending => "Pending",
            ReceivableStatus::Partial => "Partially collected",
            ReceivableStatus::Collected => "Collected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receivable {
    pub debtor: String,
    pub amount: f64,
    pub due_date: String,
    pub status: Option<ReceivableStatus>,
    #[serde(default)]
    pub currency: Currency,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub name: String,
    pub installment_amount: f64,
    pub remaining_months: f64,
    /// Day of month, 1-31.
    pub payment_day: u32,
    pub end_date: String,
    pub total_amount: Option<f64>,
    pub category: Option<String>,
    #[serde(default)]
    pub currency: Currency,
    pub details: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Currency,
    pub renewal_day: u32,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<String>,
    #[serde(default)]
    pub currency: Currency,
}

impl Goal {
    /// Completion percentage capped at 100; 0 for goals without a positive target.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    pub findeks_score: Option<f64>,
    pub salary: Option<f64>,
    pub additional_income: Option<f64>,
    #[serde(default)]
    pub currency: Currency,
}

impl Profile {
    pub fn monthly_income(&self) -> f64 {
        self.salary.unwrap_or(0.0) + self.additional_income.unwrap_or(0.0)
    }
}

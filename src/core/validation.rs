//! Sanity checks on ledger records before they are aggregated.
use super::config::AppConfig;
use super::records::{Asset, Installment, Liability, Receivable, Subscription, Transaction};
use chrono::NaiveDate;
use serde::Serialize;

const MAX_NAME_LEN: usize = 100;
const MAX_DETAILS_LEN: usize = 500;
const MAX_REMAINING_MONTHS: f64 = 600.0;
// Largest integer exactly representable in an f64.
const MAX_AMOUNT: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn check_name(&mut self, name: &str, what: &str) {
        if name.trim().is_empty() {
            self.push(format!("{what} is required"));
        } else if name.chars().count() > MAX_NAME_LEN {
            self.push(format!("{what} is too long (max {MAX_NAME_LEN} characters)"));
        }
    }

    fn check_amount(&mut self, amount: f64, what: &str) {
        if amount < 0.0 {
            self.push(format!("{what} cannot be negative"));
        }
        if amount > MAX_AMOUNT {
            self.push(format!("{what} is too large"));
        }
    }

    fn check_details(&mut self, details: Option<&str>) {
        if details.is_some_and(|d| d.chars().count() > MAX_DETAILS_LEN) {
            self.push(format!(
                "Details are too long (max {MAX_DETAILS_LEN} characters)"
            ));
        }
    }
}

/// `YYYY-MM-DD` that is also a real calendar date.
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn validate_asset(asset: &Asset) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_name(&asset.name, "Asset name");
    result.check_amount(asset.value, "Asset value");
    result.check_details(asset.details.as_deref());
    result
}

pub fn validate_liability(liability: &Liability) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_name(&liability.name, "Liability name");
    result.check_amount(liability.current_debt, "Debt amount");

    if let Some(limit) = liability.total_limit {
        if limit < 0.0 {
            result.push("Total limit cannot be negative");
        }
        if liability.current_debt > limit {
            result.push("Current debt cannot exceed the total limit");
        }
    }

    if liability.apr.is_some_and(|apr| !(0.0..=100.0).contains(&apr)) {
        result.push("Interest rate must be between 0 and 100");
    }

    if liability
        .due_date
        .as_deref()
        .is_some_and(|d| !d.is_empty() && !is_valid_date(d))
    {
        result.push("Invalid date format (use YYYY-MM-DD)");
    }

    result.check_details(liability.details.as_deref());
    result
}

pub fn validate_receivable(receivable: &Receivable) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_name(&receivable.debtor, "Debtor name");
    result.check_amount(receivable.amount, "Receivable amount");
    if !is_valid_date(&receivable.due_date) {
        result.push("A valid due date is required (YYYY-MM-DD)");
    }
    result.check_details(receivable.details.as_deref());
    result
}

pub fn validate_installment(installment: &Installment) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_name(&installment.name, "Installment name");
    result.check_amount(installment.installment_amount, "Installment amount");

    let months = installment.remaining_months;
    if months < 0.0 {
        result.push("Remaining months cannot be negative");
    }
    if months.fract() != 0.0 {
        result.push("Remaining months must be a whole number");
    }
    if months > MAX_REMAINING_MONTHS {
        result.push("Remaining months is too large (max 600)");
    }

    if !(1..=31).contains(&installment.payment_day) {
        result.push("Payment day must be between 1 and 31");
    }

    if !is_valid_date(&installment.end_date) {
        result.push("A valid end date is required (YYYY-MM-DD)");
    }

    result.check_details(installment.details.as_deref());
    result
}

pub fn validate_subscription(subscription: &Subscription) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_name(&subscription.name, "Subscription name");
    result.check_amount(subscription.price, "Subscription price");
    if !(1..=31).contains(&subscription.renewal_day) {
        result.push("Renewal day must be between 1 and 31");
    }
    result
}

pub fn validate_transaction(transaction: &Transaction) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.check_amount(transaction.amount, "Transaction amount");
    if !is_valid_date(&transaction.date) {
        result.push("A valid transaction date is required (YYYY-MM-DD)");
    }
    result
}

/// Findeks scores are whole numbers between 300 and 1900.
pub fn validate_findeks_score(score: f64) -> ValidationResult {
    let mut result = ValidationResult::default();
    if !(300.0..=1900.0).contains(&score) {
        result.push("Findeks score must be between 300 and 1900");
    }
    if score.fract() != 0.0 {
        result.push("Findeks score must be a whole number");
    }
    result
}

fn collect<'a, T: 'a>(
    into: &mut ValidationResult,
    kind: &str,
    records: impl IntoIterator<Item = &'a T>,
    validate: impl Fn(&T) -> ValidationResult,
) {
    for (i, record) in records.into_iter().enumerate() {
        for error in validate(record).errors {
            into.push(format!("{kind} #{}: {error}", i + 1));
        }
    }
}

/// Validates every record in the ledger, prefixing each error with the record
/// kind and its 1-based position.
pub fn validate_ledger(config: &AppConfig) -> ValidationResult {
    let mut result = ValidationResult::default();
    collect(&mut result, "asset", &config.assets, validate_asset);
    collect(&mut result, "liability", &config.liabilities, validate_liability);
    collect(&mut result, "receivable", &config.receivables, validate_receivable);
    collect(&mut result, "installment", &config.installments, validate_installment);
    collect(&mut result, "subscription", &config.subscriptions, validate_subscription);
    collect(&mut result, "transaction", &config.transactions, validate_transaction);

    // Zero is treated as "not provided" by the scorer.
    if let Some(score) = config.profile.findeks_score.filter(|s| *s != 0.0) {
        for error in validate_findeks_score(score).errors {
            result.push(format!("profile: {error}"));
        }
    }
    result
}

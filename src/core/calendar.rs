//! Dated payments coming up in the ledger.
//!
//! Receivables fall on their due date, liabilities on their due date when
//! they have one, and installments on their payment day every month until
//! their end date. A payment day the month does not have (the 31st in
//! November) produces no event for that month.
use super::config::AppConfig;
use super::records::{Currency, ReceivableStatus};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Receivable,
    Liability,
    Installment,
}

impl PaymentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentKind::Receivable => "Receivable",
            PaymentKind::Liability => "Debt",
            PaymentKind::Installment => "Installment",
        }
    }

    /// Money owed to the user rather than by the user.
    pub fn is_incoming(&self) -> bool {
        matches!(self, PaymentKind::Receivable)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentEvent {
    pub date: NaiveDate,
    pub kind: PaymentKind,
    pub name: String,
    pub amount: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReceivableStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaymentTotals {
    pub incoming: f64,
    pub outgoing: f64,
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Payment days of an installment in `[from, until)`, up to `end_date`.
fn installment_dates(
    payment_day: u32,
    end_date: NaiveDate,
    from: NaiveDate,
    until: NaiveDate,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let (mut year, mut month) = (from.year(), from.month());
    while let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        if first >= until || first > end_date {
            break;
        }
        let due = NaiveDate::from_ymd_opt(year, month, payment_day)
            .filter(|d| *d >= from && *d < until && *d <= end_date);
        if let Some(date) = due {
            dates.push(date);
        }
        (year, month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
    }
    dates
}

/// Events dated in the `days` days starting at `from`, ordered by date and
/// then by kind. Records with unparseable dates are skipped.
pub fn upcoming_payments(config: &AppConfig, from: NaiveDate, days: u32) -> Vec<PaymentEvent> {
    let until = from
        .checked_add_days(Days::new(days.into()))
        .unwrap_or(NaiveDate::MAX);
    let in_window = |date: NaiveDate| date >= from && date < until;
    let mut events = Vec::new();

    for receivable in &config.receivables {
        if let Some(date) = parse_date(&receivable.due_date).filter(|d| in_window(*d)) {
            events.push(PaymentEvent {
                date,
                kind: PaymentKind::Receivable,
                name: receivable.debtor.clone(),
                amount: receivable.amount,
                currency: receivable.currency,
                status: receivable.status,
            });
        }
    }

    for liability in &config.liabilities {
        let date = liability.due_date.as_deref().and_then(parse_date);
        if let Some(date) = date.filter(|d| in_window(*d)) {
            events.push(PaymentEvent {
                date,
                kind: PaymentKind::Liability,
                name: liability.name.clone(),
                amount: liability.current_debt,
                currency: liability.currency,
                status: None,
            });
        }
    }

    for installment in &config.installments {
        let Some(end_date) = parse_date(&installment.end_date) else {
            debug!(name = %installment.name, "Skipping installment with invalid end date");
            continue;
        };
        for date in installment_dates(installment.payment_day, end_date, from, until) {
            events.push(PaymentEvent {
                date,
                kind: PaymentKind::Installment,
                name: installment.name.clone(),
                amount: installment.installment_amount,
                currency: installment.currency,
                status: None,
            });
        }
    }

    events.sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));
    debug!(%from, days, count = events.len(), "Collected upcoming payments");
    events
}

pub fn payment_totals(events: &[PaymentEvent]) -> PaymentTotals {
    events
        .iter()
        .fold(PaymentTotals::default(), |mut totals, event| {
            if event.kind.is_incoming() {
                totals.incoming += event.amount;
            } else {
                totals.outgoing += event.amount;
            }
            totals
        })
}

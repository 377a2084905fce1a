use super::{OutputFormat, render, ui};
use crate::core::calendar::{PaymentEvent, PaymentTotals, payment_totals, upcoming_payments};
use crate::core::config::AppConfig;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use comfy_table::{Cell, Color};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CalendarReport {
    pub from: NaiveDate,
    pub days: u32,
    pub events: Vec<PaymentEvent>,
    pub totals: PaymentTotals,
}

impl CalendarReport {
    pub fn new(config: &AppConfig, from: NaiveDate, days: u32) -> Self {
        let events = upcoming_payments(config, from, days);
        CalendarReport {
            from,
            days,
            totals: payment_totals(&events),
            events,
        }
    }

    pub fn display_as_table(&self) -> String {
        let last_day = self
            .from
            .checked_add_days(Days::new(self.days.saturating_sub(1).into()))
            .unwrap_or(NaiveDate::MAX);
        let mut output = format!(
            "{}\n\n",
            ui::style_text(
                &format!("Payments from {} to {}", self.from, last_day),
                ui::StyleType::Title
            )
        );

        if self.events.is_empty() {
            output.push_str("No payments due in this period");
            return output;
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Date"),
            ui::header_cell("Type"),
            ui::header_cell("Name"),
            ui::header_cell("Amount"),
            ui::header_cell("Currency"),
        ]);
        for event in &self.events {
            let mut name = event.name.clone();
            if let Some(status) = event.status {
                name.push_str(&format!(" ({})", status.display_name()));
            }
            let color = if event.kind.is_incoming() {
                Color::Green
            } else {
                Color::Red
            };
            table.add_row(vec![
                Cell::new(event.date),
                Cell::new(event.kind.display_name()).fg(color),
                Cell::new(name),
                ui::amount_cell(event.amount),
                Cell::new(event.currency.code()),
            ]);
        }
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {} in / {} out",
            ui::style_text("Total", ui::StyleType::TotalLabel),
            ui::format_amount(self.totals.incoming),
            ui::format_amount(self.totals.outgoing)
        ));
        output
    }
}

pub fn run(config: &AppConfig, from: NaiveDate, days: u32, format: OutputFormat) -> Result<()> {
    let report = CalendarReport::new(config, from, days);
    println!(
        "{}",
        render(&report, format, CalendarReport::display_as_table)?
    );
    Ok(())
}

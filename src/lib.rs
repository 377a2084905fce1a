pub mod cli;
pub mod core;

use crate::cli::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::snapshot::{FinancialSnapshot, month_cash_flow};
use crate::core::SafeToSpendMode;
use anyhow::Result;
use chrono::{Datelike, Local};
use tracing::{debug, info};

pub enum AppCommand {
    Summary,
    Health,
    Spend { mode: Option<SafeToSpendMode> },
    Advice { limit: Option<usize> },
    Calendar { days: u32 },
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    info!("finpulse starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded ledger: {config:#?}");

    let snapshot = FinancialSnapshot::from_ledger(&config);
    let today = Local::now().date_naive();

    match command {
        AppCommand::Summary => cli::summary::run(&config, &snapshot, today, format),
        AppCommand::Health => cli::health::run(&snapshot, format),
        AppCommand::Spend { mode } => {
            let cash_flow = month_cash_flow(&config, today.year(), today.month());
            cli::spend::run(
                &snapshot,
                mode.or(config.safe_to_spend_mode),
                cash_flow,
                config.profile.currency.code(),
                format,
            )
        }
        AppCommand::Advice { limit } => cli::advice::run(&snapshot, limit, format),
        AppCommand::Calendar { days } => cli::calendar::run(&config, today, days, format),
    }
}

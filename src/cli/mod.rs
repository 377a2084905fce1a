//! Terminal presentation of the computed reports

pub mod advice;
pub mod calendar;
pub mod health;
pub mod setup;
pub mod spend;
pub mod summary;
pub mod ui;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Renders a report either through its table view or as pretty JSON.
pub(crate) fn render<T: Serialize>(
    report: &T,
    format: OutputFormat,
    as_table: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(as_table(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

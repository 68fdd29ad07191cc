//! Terminal presentation
//!
//! Writes rendered views as an aligned text table, JSON or CSV.

use serde::Deserialize;
use std::io::Write;

use super::render::{DashboardView, StatsView};
use crate::api::UserProfile;

/// Output format for rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Presentation errors
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const TRANSACTION_HEADERS: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Write the whole dashboard view
pub fn present_dashboard<W: Write>(
    out: &mut W,
    view: &DashboardView,
    format: OutputFormat,
) -> Result<(), PresentError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["id"].iter().chain(TRANSACTION_HEADERS.iter()))?;
            for row in &view.transactions.rows {
                let key = row.key.to_string();
                writer.write_record(std::iter::once(key.as_str()).chain(row.cells()))?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => write_dashboard_table(out, view)?,
    }

    Ok(())
}

fn write_dashboard_table<W: Write>(out: &mut W, view: &DashboardView) -> std::io::Result<()> {
    writeln!(out, "Balance: {}", view.balance)?;
    writeln!(out)?;

    let rows = &view.transactions.rows;
    if rows.is_empty() {
        writeln!(out, "No transactions yet.")?;
    } else {
        let mut widths = TRANSACTION_HEADERS.map(display_width);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(display_width(cell));
            }
        }
        let row_width = rows.len().to_string().len().max(1);

        // Header
        write!(out, "{:<row_width$}", "#")?;
        for (header, width) in TRANSACTION_HEADERS.iter().zip(widths) {
            write!(out, "  {:<width$}", header)?;
        }
        writeln!(out)?;

        let total = row_width + widths.iter().map(|w| w + 2).sum::<usize>();
        writeln!(out, "{}", "-".repeat(total))?;

        for (i, row) in rows.iter().enumerate() {
            write!(out, "{:<row_width$}", i + 1)?;
            let cells = row.cells();
            for (col, (cell, width)) in cells.iter().zip(widths).enumerate() {
                // Amounts read better right-aligned
                if col == cells.len() - 1 {
                    write!(out, "  {:>width$}", cell)?;
                } else {
                    write!(out, "  {:<width$}", cell)?;
                }
            }
            writeln!(out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Categories:")?;
    for option in &view.categories.options {
        if option.value.is_empty() {
            continue;
        }
        writeln!(out, "  {:>4}  {}", option.value, option.label)?;
    }
    if view.categories.options.iter().all(|o| o.value.is_empty()) {
        writeln!(out, "  (none)")?;
    }

    Ok(())
}

/// Write the category statistics view
pub fn present_stats<W: Write>(
    out: &mut W,
    view: &StatsView,
    format: OutputFormat,
) -> Result<(), PresentError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in &view.rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if view.rows.is_empty() {
                writeln!(out, "No categories yet.")?;
                return Ok(());
            }

            let name_width = view
                .rows
                .iter()
                .map(|r| display_width(&r.category))
                .max()
                .unwrap_or(0)
                .max("Category".len());

            writeln!(
                out,
                "{:<name_width$}  {:>12}  {:>12}  {:>12}",
                "Category", "Income", "Expense", "Net"
            )?;
            writeln!(out, "{}", "-".repeat(name_width + 42))?;
            for row in &view.rows {
                writeln!(
                    out,
                    "{:<name_width$}  {:>12}  {:>12}  {:>12}",
                    row.category, row.income, row.expense, row.net
                )?;
            }
        }
    }

    Ok(())
}

/// Write the logged-in user's account details
pub fn present_profile<W: Write>(
    out: &mut W,
    profile: &UserProfile,
    format: OutputFormat,
) -> Result<(), PresentError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, profile)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(profile)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "Id:       {}", profile.id)?;
            writeln!(out, "Username: {}", profile.username)?;
            writeln!(out, "Email:    {}", profile.email)?;
        }
    }

    Ok(())
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Once-per-period monthly report. Due when the stored marker is older than
//! the current YYYY-MM period and the export path exists; the report body
//! covers the previous calendar month. Running it again within the same
//! period is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;

use crate::config::Settings;
use crate::ledger;
use crate::models::MonthlySummary;
use crate::utils::fmt_money;

pub fn period_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

/// Generates the previous month's report if one has not been generated this
/// period yet. Returns the written path, or `None` when nothing was due.
/// On generation the period marker is persisted through `settings.save`.
pub fn generate_if_due(
    conn: &Connection,
    settings: &mut Settings,
    settings_path: &Path,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    let period = period_of(today);
    if let Some(last) = &settings.last_report_period {
        if last.as_str() >= period.as_str() {
            return Ok(None);
        }
    }
    if settings.report_export_path.is_empty() {
        return Ok(None);
    }
    let dir = Path::new(&settings.report_export_path);
    if !dir.exists() {
        return Ok(None);
    }

    let (year, month) = previous_month(today);
    let summary = ledger::monthly_aggregate(conn, year, month)?;
    let text = render(&summary, settings);

    let file = dir.join(format!("Report{:04}-{:02}.txt", year, month));
    fs::write(&file, text).with_context(|| format!("Write report at {}", file.display()))?;

    settings.last_report_period = Some(period);
    settings.save(settings_path)?;
    Ok(Some(file))
}

pub fn render(summary: &MonthlySummary, settings: &Settings) -> String {
    let suffix = &settings.currency_suffix;
    let saved = settings.monthly_budget - summary.expense_total;
    let mut text = format!(
        "FundTrack Monthly Report\n\
         =========================\n\
         Year: {:04}\n\
         Month: {:02}\n\
         \n\
         Total Income: {}\n\
         \n\
         Budget: {}\n\
         Total Expense: {}\n\
         Saved: {}\n\
         \n\
         Expenses By Category:\n\
         \n",
        summary.year,
        summary.month,
        fmt_money(&summary.income_total, suffix),
        fmt_money(&settings.monthly_budget, suffix),
        fmt_money(&summary.expense_total, suffix),
        fmt_money(&saved, suffix),
    );
    for entry in &summary.expense_by_category {
        text.push_str(&format!(
            "- {}: {}\n",
            entry.category,
            fmt_money(&entry.total, suffix)
        ));
    }
    text
}

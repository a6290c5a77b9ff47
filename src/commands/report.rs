// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use crate::config::Settings;
use crate::ledger;
use crate::report;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(
    conn: &Connection,
    settings: &mut Settings,
    settings_path: &Path,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("generate", _)) => generate(conn, settings, settings_path)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("yearly", sub)) => yearly(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn generate(conn: &Connection, settings: &mut Settings, settings_path: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    match report::generate_if_due(conn, settings, settings_path, today)? {
        Some(path) => println!("Monthly report written to {}", path.display()),
        None => println!("Nothing to do: report already generated this period, or no export path is set"),
    }
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;
    let summary = ledger::monthly_aggregate(conn, year, month)?;

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let mut rows = vec![vec!["Income".to_string(), summary.income_total.to_string()]];
        for entry in &summary.expense_by_category {
            rows.push(vec![entry.category.clone(), entry.total.to_string()]);
        }
        rows.push(vec![
            "Expense total".to_string(),
            summary.expense_total.to_string(),
        ]);
        let month_hdr = format!("{:04}-{:02}", year, month);
        println!("{}", pretty_table(&[month_hdr.as_str(), "Amount"], rows));
    }
    Ok(())
}

fn yearly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();
    let series = ledger::yearly_series(conn, year)?;

    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let mut rows = Vec::new();
        for m in 0..12 {
            rows.push(vec![
                format!("{:04}-{:02}", year, m + 1),
                series.income[m].to_string(),
                series.expense[m].to_string(),
            ]);
        }
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}

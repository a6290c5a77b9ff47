// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local, Timelike};
use rusqlite::Connection;

use crate::config::Settings;
use crate::ledger;
use crate::models::SortKey;
use crate::report;
use crate::utils::{fmt_money, pretty_table};

fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        17..=20 => "Good Evening",
        _ => "The numbers never sleep.",
    }
}

pub fn handle(conn: &Connection, settings: &mut Settings, settings_path: &Path) -> Result<()> {
    let now = Local::now();
    let today = now.date_naive();

    // The periodic report check runs on every dashboard render.
    if let Some(path) = report::generate_if_due(conn, settings, settings_path, today)? {
        println!("Monthly report written to {}", path.display());
        println!();
    }

    if settings.display_name.is_empty() {
        println!("{}", greeting(now.hour()));
    } else {
        println!("{} {}", greeting(now.hour()), settings.display_name);
    }
    println!();

    let summary = ledger::monthly_aggregate(conn, today.year(), today.month())?;
    let suffix = &settings.currency_suffix;
    let balance = settings.monthly_budget - summary.expense_total;
    println!("Budget:  {}", fmt_money(&settings.monthly_budget, suffix));
    println!("Expense: {}", fmt_money(&summary.expense_total, suffix));
    println!("─────────────────────────");
    println!("Balance: {}", fmt_money(&balance, suffix));
    println!();

    let recent = ledger::history(conn, SortKey::CreatedDesc, Some(5))?;
    let rows: Vec<Vec<String>> = recent
        .iter()
        .map(|t| {
            vec![
                t.description.clone(),
                fmt_money(&t.amount, suffix),
                t.date.to_string(),
                t.kind.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Description", "Amount", "Date", "Kind"], rows)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::greeting;

    #[test]
    fn greeting_bands() {
        assert_eq!(greeting(5), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(16), "Good Afternoon");
        assert_eq!(greeting(17), "Good Evening");
        assert_eq!(greeting(20), "Good Evening");
        assert_eq!(greeting(23), "The numbers never sleep.");
        assert_eq!(greeting(3), "The numbers never sleep.");
    }
}

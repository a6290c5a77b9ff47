// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Bulk edits over a selection of transaction ids. Bad input (amount, date)
//! is reported as an error and nothing is mutated; ids with no row are
//! skipped, which shows up in the reported count.

use crate::ledger;
use crate::utils::{parse_date, parse_decimal, parse_ids};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let changed = match m.subcommand() {
        Some(("delete", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            let n = ledger::delete(conn, &ids)?;
            println!("Deleted {} of {} selected transaction(s)", n, ids.len());
            return Ok(());
        }
        Some(("amount", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            (ledger::change_amount(conn, &ids, amount)?, ids.len())
        }
        Some(("kind", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            (ledger::change_kind(conn, &ids)?, ids.len())
        }
        Some(("category", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            let category = sub.get_one::<String>("category").unwrap();
            (ledger::change_category(conn, &ids, category)?, ids.len())
        }
        Some(("date", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            let date = parse_date(sub.get_one::<String>("date").unwrap())?;
            (ledger::change_date(conn, &ids, date)?, ids.len())
        }
        Some(("description", sub)) => {
            let ids = parse_ids(sub.get_one::<String>("ids").unwrap())?;
            let description = sub.get_one::<String>("description").unwrap();
            (ledger::change_description(conn, &ids, description)?, ids.len())
        }
        _ => return Ok(()),
    };
    println!("Updated {} of {} selected transaction(s)", changed.0, changed.1);
    Ok(())
}

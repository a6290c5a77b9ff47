// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::models::SortKey;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_kind, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("history", sub)) => history(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let account = sub.get_one::<String>("account").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();

    let id = ledger::add(conn, date, kind, category, account, amount, description)?;
    println!(
        "Recorded {} {} on {} under '{}' (id: {})",
        kind, amount, date, category, id
    );
    Ok(())
}

pub fn query_rows(
    conn: &Connection,
    sub: &clap::ArgMatches,
) -> Result<Vec<crate::models::Transaction>> {
    let sort = SortKey::parse(sub.get_one::<String>("sort").unwrap());
    let limit = sub.get_one::<usize>("limit").copied();

    match sub.get_one::<String>("kind") {
        Some(k) => {
            let mut data = ledger::editable_history(conn, sort, parse_kind(k)?)?;
            if let Some(n) = limit {
                data.truncate(n);
            }
            Ok(data)
        }
        None => ledger::history(conn, sort, limit),
    }
}

fn history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    t.account.clone(),
                    t.amount.to_string(),
                    t.description.clone(),
                    t.created_at.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Category", "Account", "Amount", "Description", "Created"],
                rows,
            )
        );
    }
    Ok(())
}

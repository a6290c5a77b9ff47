// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::models::Kind;
use fundtrack::{cli, commands::transactions, db, ledger};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    for i in 1..=3 {
        ledger::add(
            &conn,
            NaiveDate::parse_from_str(&format!("2025-01-0{}", i), "%Y-%m-%d").unwrap(),
            Kind::Expense,
            "Groceries",
            "Bank",
            "10".parse().unwrap(),
            "",
        )
        .unwrap();
    }
    conn
}

#[test]
fn history_limit_respected() {
    let conn = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fundtrack", "tx", "history", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("history", hist_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, hist_m).unwrap();
            assert_eq!(rows.len(), 2);
            // Default sort is date descending
            assert_eq!(rows[0].date.to_string(), "2025-01-03");
        } else {
            panic!("no history subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn history_kind_filter_respected() {
    let conn = setup();
    ledger::add(
        &conn,
        NaiveDate::parse_from_str("2025-01-04", "%Y-%m-%d").unwrap(),
        Kind::Income,
        "Salary",
        "Bank",
        "100".parse().unwrap(),
        "",
    )
    .unwrap();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fundtrack", "tx", "history", "--kind", "income"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("history", hist_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, hist_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].kind, Kind::Income);
        } else {
            panic!("no history subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn history_unknown_sort_key_falls_back_to_default() {
    let conn = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["fundtrack", "tx", "history", "--sort", "sideways"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("history", hist_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, hist_m).unwrap();
            assert_eq!(rows[0].date.to_string(), "2025-01-03");
            assert_eq!(rows[2].date.to_string(), "2025-01-01");
        } else {
            panic!("no history subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

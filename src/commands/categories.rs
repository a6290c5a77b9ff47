// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::models::Kind;
use crate::utils::{parse_kind, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let kinds = match sub.get_one::<String>("kind") {
                Some(k) => vec![parse_kind(k)?],
                None => vec![Kind::Income, Kind::Expense],
            };
            let mut data = Vec::new();
            for kind in kinds {
                for cat in ledger::categories(conn, kind)? {
                    data.push(vec![cat.kind.to_string(), cat.name]);
                }
            }
            println!("{}", pretty_table(&["Kind", "Category"], data));
        }
        _ => {}
    }
    Ok(())
}

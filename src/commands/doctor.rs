// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions whose category belongs to the other kind
    let mut stmt = conn.prepare(
        "SELECT t.id FROM transactions t JOIN categories c ON t.category_id=c.id \
         WHERE t.kind != c.kind",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["kind_category_mismatch".into(), format!("tx {}", id)]);
    }

    // 2) Orphan category references
    let mut stmt2 = conn.prepare(
        "SELECT t.id FROM transactions t LEFT JOIN categories c ON t.category_id=c.id \
         WHERE c.id IS NULL",
    )?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["missing_category".into(), format!("tx {}", id)]);
    }

    // 3) Amounts that do not parse as a non-negative decimal
    let mut stmt3 = conn.prepare("SELECT id, amount FROM transactions")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        match amount.parse::<Decimal>() {
            Ok(d) if d >= Decimal::ZERO => {}
            _ => rows.push(vec!["bad_amount".into(), format!("tx {}: '{}'", id, amount)]),
        }
    }

    // 4) Dates that do not parse
    let mut stmt4 = conn.prepare("SELECT id, date FROM transactions")?;
    let mut cur4 = stmt4.query([])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_date".into(), format!("tx {}: '{}'", id, date)]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

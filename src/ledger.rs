// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Query, sort, and aggregate layer over the transaction store.
//!
//! Listing queries come back as plain ordered [`Transaction`] records; the
//! presentation layer does all formatting. Bulk mutations take a selection of
//! transaction ids and report how many rows they touched: an empty selection
//! is a no-op, an id with no row is skipped, and a category move that would
//! break the kind/category invariant skips that transaction.

use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::models::{Category, CategoryTotal, Kind, MonthlySummary, SortKey, Transaction, YearlySeries};
use crate::utils::id_for_category;

const SELECT_COLS: &str = "SELECT t.id, t.date, t.kind, c.name, t.account, t.amount, t.description, t.created_at \
     FROM transactions t JOIN categories c ON t.category_id=c.id";

/// Trailing `id ASC` keeps every ordering stable: rows that compare equal on
/// the sort key stay in insertion order. Amounts are decimal TEXT, so amount
/// orderings cast to get numeric comparison.
fn order_sql(sort: SortKey) -> &'static str {
    match sort {
        SortKey::DateDesc => " ORDER BY t.date DESC, t.id ASC",
        SortKey::DateAsc => " ORDER BY t.date ASC, t.id ASC",
        SortKey::CreatedAsc => " ORDER BY t.created_at ASC, t.id ASC",
        SortKey::CreatedDesc => " ORDER BY t.created_at DESC, t.id ASC",
        SortKey::AmountDesc => " ORDER BY CAST(t.amount AS REAL) DESC, t.id ASC",
        SortKey::AmountAsc => " ORDER BY CAST(t.amount AS REAL) ASC, t.id ASC",
        SortKey::IncomeFirst => " ORDER BY t.kind DESC, t.date DESC, t.id ASC",
        SortKey::ExpenseFirst => " ORDER BY t.kind ASC, t.date DESC, t.id ASC",
    }
}

fn query_transactions(
    conn: &Connection,
    sql: &str,
    params_vec: &[String],
) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let kind_s: String = r.get(2)?;
        let category: String = r.get(3)?;
        let account: String = r.get(4)?;
        let amount_s: String = r.get(5)?;
        let description: String = r.get(6)?;
        let created_at: String = r.get(7)?;

        let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' in transactions", date_s))?;
        let kind = Kind::parse(&kind_s)
            .with_context(|| format!("Invalid kind '{}' in transactions", kind_s))?;
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transactions", amount_s))?;
        data.push(Transaction {
            id,
            date,
            kind,
            category,
            account,
            amount,
            description,
            created_at,
        });
    }
    Ok(data)
}

/// Ordered transaction listing. `limit` of 5 feeds the dashboard card; the
/// history view passes `None`.
pub fn history(conn: &Connection, sort: SortKey, limit: Option<usize>) -> Result<Vec<Transaction>> {
    let mut sql = format!("{}{}", SELECT_COLS, order_sql(sort));
    let mut params_vec: Vec<String> = Vec::new();
    if let Some(n) = limit {
        sql.push_str(" LIMIT ?");
        params_vec.push(n.to_string());
    }
    query_transactions(conn, &sql, &params_vec)
}

/// The editing view: same orderings as [`history`], one kind only.
pub fn editable_history(conn: &Connection, sort: SortKey, kind: Kind) -> Result<Vec<Transaction>> {
    let sql = format!("{} WHERE t.kind=?{}", SELECT_COLS, order_sql(sort));
    query_transactions(conn, &sql, &[kind.as_str().to_string()])
}

/// Sums one calendar month: income as a single total, expenses per category
/// in category-definition order. A month with no transactions yields zero
/// income and an empty breakdown.
pub fn monthly_aggregate(conn: &Connection, year: i32, month: u32) -> Result<MonthlySummary> {
    let month_key = format!("{:04}-{:02}", year, month);

    let mut income_total = Decimal::ZERO;
    let mut stmt =
        conn.prepare("SELECT amount FROM transactions WHERE kind='income' AND substr(date,1,7)=?1")?;
    let mut rows = stmt.query(params![month_key])?;
    while let Some(r) = rows.next()? {
        let s: String = r.get(0)?;
        income_total += s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transactions", s))?;
    }

    let mut expense_total = Decimal::ZERO;
    let mut breakdown: Vec<CategoryTotal> = Vec::new();
    let mut stmt = conn.prepare(
        "SELECT c.name, t.amount FROM transactions t JOIN categories c ON t.category_id=c.id \
         WHERE t.kind='expense' AND substr(t.date,1,7)=?1 ORDER BY c.id, t.id",
    )?;
    let mut rows = stmt.query(params![month_key])?;
    while let Some(r) = rows.next()? {
        let name: String = r.get(0)?;
        let s: String = r.get(1)?;
        let amount = s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transactions", s))?;
        expense_total += amount;
        match breakdown.last_mut() {
            Some(last) if last.category == name => last.total += amount,
            _ => breakdown.push(CategoryTotal {
                category: name,
                total: amount,
            }),
        }
    }

    Ok(MonthlySummary {
        year,
        month,
        income_total,
        expense_total,
        expense_by_category: breakdown,
    })
}

/// Per-month income and expense totals for one year, zero-filled. This is
/// the series the bar chart consumes.
pub fn yearly_series(conn: &Connection, year: i32) -> Result<YearlySeries> {
    let mut series = YearlySeries::empty(year);
    let mut stmt = conn
        .prepare("SELECT substr(date,6,2), kind, amount FROM transactions WHERE substr(date,1,4)=?1")?;
    let mut rows = stmt.query(params![format!("{:04}", year)])?;
    while let Some(r) = rows.next()? {
        let month_s: String = r.get(0)?;
        let kind_s: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let month: usize = month_s
            .parse()
            .with_context(|| format!("Invalid date month '{}' in transactions", month_s))?;
        if !(1..=12).contains(&month) {
            continue;
        }
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transactions", amount_s))?;
        match Kind::parse(&kind_s) {
            Some(Kind::Income) => series.income[month - 1] += amount,
            Some(Kind::Expense) => series.expense[month - 1] += amount,
            None => {}
        }
    }
    Ok(series)
}

pub fn add(
    conn: &Connection,
    date: NaiveDate,
    kind: Kind,
    category: &str,
    account: &str,
    amount: Decimal,
    description: &str,
) -> Result<i64> {
    ensure!(amount >= Decimal::ZERO, "Amount must not be negative");
    let category_id = id_for_category(conn, kind, category)?;
    conn.execute(
        "INSERT INTO transactions(date, kind, category_id, account, amount, description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date.to_string(),
            kind.as_str(),
            category_id,
            account,
            amount.to_string(),
            description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn in_clause(n: usize) -> String {
    vec!["?"; n].join(",")
}

pub fn delete(conn: &Connection, ids: &[i64]) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "DELETE FROM transactions WHERE id IN ({})",
        in_clause(ids.len())
    );
    let n = conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?;
    Ok(n)
}

pub fn change_amount(conn: &Connection, ids: &[i64], amount: Decimal) -> Result<usize> {
    ensure!(amount >= Decimal::ZERO, "Amount must not be negative");
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "UPDATE transactions SET amount=? WHERE id IN ({})",
        in_clause(ids.len())
    );
    let mut params_vec: Vec<String> = vec![amount.to_string()];
    params_vec.extend(ids.iter().map(|i| i.to_string()));
    let n = conn.execute(&sql, rusqlite::params_from_iter(params_vec.iter()))?;
    Ok(n)
}

/// Flips income<->expense. The category moves with the kind: a same-named
/// category in the target kind when one exists, else the target kind's first
/// category, so the kind/category invariant holds.
pub fn change_kind(conn: &Connection, ids: &[i64]) -> Result<usize> {
    let mut changed = 0;
    for id in ids {
        let row: Option<(String, String)> = conn
            .query_row(
                "SELECT t.kind, c.name FROM transactions t \
                 JOIN categories c ON t.category_id=c.id WHERE t.id=?1",
                params![id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()?;
        let Some((kind_s, cat_name)) = row else {
            continue;
        };
        let kind = Kind::parse(&kind_s)
            .with_context(|| format!("Invalid kind '{}' in transactions", kind_s))?;
        let target = kind.flipped();
        let same_name: Option<i64> = conn
            .query_row(
                "SELECT id FROM categories WHERE kind=?1 AND name=?2",
                params![target.as_str(), cat_name],
                |r| r.get(0),
            )
            .optional()?;
        let category_id = match same_name {
            Some(id) => id,
            None => conn.query_row(
                "SELECT id FROM categories WHERE kind=?1 ORDER BY id LIMIT 1",
                params![target.as_str()],
                |r| r.get(0),
            )?,
        };
        changed += conn.execute(
            "UPDATE transactions SET kind=?1, category_id=?2 WHERE id=?3",
            params![target.as_str(), category_id, id],
        )?;
    }
    Ok(changed)
}

/// Moves transactions to the named category within each transaction's own
/// kind. A name outside that kind's set leaves the transaction unchanged.
pub fn change_category(conn: &Connection, ids: &[i64], name: &str) -> Result<usize> {
    let mut changed = 0;
    for id in ids {
        let kind_s: Option<String> = conn
            .query_row(
                "SELECT kind FROM transactions WHERE id=?1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        let Some(kind_s) = kind_s else {
            continue;
        };
        let category_id: Option<i64> = conn
            .query_row(
                "SELECT id FROM categories WHERE kind=?1 AND name=?2",
                params![kind_s, name],
                |r| r.get(0),
            )
            .optional()?;
        let Some(category_id) = category_id else {
            continue;
        };
        changed += conn.execute(
            "UPDATE transactions SET category_id=?1 WHERE id=?2",
            params![category_id, id],
        )?;
    }
    Ok(changed)
}

pub fn change_date(conn: &Connection, ids: &[i64], date: NaiveDate) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "UPDATE transactions SET date=? WHERE id IN ({})",
        in_clause(ids.len())
    );
    let mut params_vec: Vec<String> = vec![date.to_string()];
    params_vec.extend(ids.iter().map(|i| i.to_string()));
    let n = conn.execute(&sql, rusqlite::params_from_iter(params_vec.iter()))?;
    Ok(n)
}

pub fn change_description(conn: &Connection, ids: &[i64], description: &str) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "UPDATE transactions SET description=? WHERE id IN ({})",
        in_clause(ids.len())
    );
    let mut params_vec: Vec<String> = vec![description.to_string()];
    params_vec.extend(ids.iter().map(|i| i.to_string()));
    let n = conn.execute(&sql, rusqlite::params_from_iter(params_vec.iter()))?;
    Ok(n)
}

/// One kind's category set in definition order.
pub fn categories(conn: &Connection, kind: Kind) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, kind, name FROM categories WHERE kind=?1 ORDER BY id")?;
    let rows = stmt.query_map(params![kind.as_str()], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;
    let mut data = Vec::new();
    for row in rows {
        let (id, kind_s, name) = row?;
        let kind = Kind::parse(&kind_s)
            .with_context(|| format!("Invalid kind '{}' in categories", kind_s))?;
        data.push(Category { id, kind, name });
    }
    Ok(data)
}

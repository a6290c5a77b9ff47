// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income/expense classification of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Kind> {
        match s.to_ascii_lowercase().as_str() {
            "income" | "i" => Some(Kind::Income),
            "expense" | "e" => Some(Kind::Expense),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Kind {
        match self {
            Kind::Income => Kind::Expense,
            Kind::Expense => Kind::Income,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind-scoped transaction label, e.g. "Groceries" under expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub kind: Kind,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: Kind,
    pub category: String,
    pub account: String,
    pub amount: Decimal,
    pub description: String,
    pub created_at: String,
}

/// Orderings for the history and editing views.
///
/// Unrecognized keys fall back to [`SortKey::DateDesc`]; every ordering
/// breaks ties by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    CreatedAsc,
    CreatedDesc,
    AmountDesc,
    AmountAsc,
    IncomeFirst,
    ExpenseFirst,
}

impl SortKey {
    pub fn parse(s: &str) -> SortKey {
        match s.to_ascii_lowercase().as_str() {
            "date-desc" | "date desc" => SortKey::DateDesc,
            "date-asc" | "date asc" => SortKey::DateAsc,
            "created-asc" | "created asc" => SortKey::CreatedAsc,
            "created-desc" | "created desc" => SortKey::CreatedDesc,
            "amount-desc" | "amount h->l" => SortKey::AmountDesc,
            "amount-asc" | "amount l->h" => SortKey::AmountAsc,
            "income-first" | "income -> expense" => SortKey::IncomeFirst,
            "expense-first" | "expense -> income" => SortKey::ExpenseFirst,
            _ => SortKey::default(),
        }
    }
}

/// One month's totals: income as a single sum, expenses broken down per
/// category in category-definition order.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub expense_by_category: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Chart input: per-month income and expense totals for one calendar year,
/// zero-filled for months with no transactions.
#[derive(Debug, Clone, Serialize)]
pub struct YearlySeries {
    pub year: i32,
    pub income: [Decimal; 12],
    pub expense: [Decimal; 12],
}

impl YearlySeries {
    pub fn empty(year: i32) -> Self {
        YearlySeries {
            year,
            income: [Decimal::ZERO; 12],
            expense: [Decimal::ZERO; 12],
        }
    }
}

// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fundtrack::config::Settings;
use fundtrack::models::Kind;
use fundtrack::{db, ledger, report};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn settings_for(dir: &std::path::Path) -> Settings {
    Settings {
        display_name: "Alice".into(),
        monthly_budget: dec("1000"),
        currency_suffix: "AED".into(),
        report_export_path: dir.to_string_lossy().into_owned(),
        ..Settings::default()
    }
}

#[test]
fn generates_previous_month_once_per_period() {
    let conn = setup();
    let out = tempfile::tempdir().unwrap();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path().join("settings.json");
    let mut settings = settings_for(out.path());

    ledger::add(&conn, d("2023-12-05"), Kind::Income, "Salary", "Bank", dec("100"), "").unwrap();
    ledger::add(&conn, d("2023-12-10"), Kind::Expense, "Groceries", "Bank", dec("50"), "").unwrap();

    let today = d("2024-01-15");
    let path = report::generate_if_due(&conn, &mut settings, &cfg_path, today)
        .unwrap()
        .expect("report should be due");
    assert!(path.ends_with("Report2023-12.txt"));
    assert_eq!(settings.last_report_period.as_deref(), Some("2024-01"));
    // Marker is persisted, not just held in memory
    let reloaded = Settings::load(&cfg_path).unwrap();
    assert_eq!(reloaded.last_report_period.as_deref(), Some("2024-01"));

    let first_content = std::fs::read_to_string(&path).unwrap();
    assert!(first_content.contains("Total Income: 100 AED"));
    assert!(first_content.contains("Total Expense: 50 AED"));
    assert!(first_content.contains("Saved: 950 AED"));
    assert!(first_content.contains("- Groceries: 50 AED"));

    // Second run in the same period: no-op, marker and content unchanged
    let again = report::generate_if_due(&conn, &mut settings, &cfg_path, today).unwrap();
    assert!(again.is_none());
    assert_eq!(settings.last_report_period.as_deref(), Some("2024-01"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first_content);
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 1);
}

#[test]
fn not_due_when_marker_is_current_or_newer() {
    let conn = setup();
    let out = tempfile::tempdir().unwrap();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path().join("settings.json");

    let mut settings = settings_for(out.path());
    settings.last_report_period = Some("2024-01".into());
    assert!(
        report::generate_if_due(&conn, &mut settings, &cfg_path, d("2024-01-20"))
            .unwrap()
            .is_none()
    );

    // A marker from the future also suppresses generation
    settings.last_report_period = Some("2024-06".into());
    assert!(
        report::generate_if_due(&conn, &mut settings, &cfg_path, d("2024-01-20"))
            .unwrap()
            .is_none()
    );
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn due_again_in_the_next_period() {
    let conn = setup();
    let out = tempfile::tempdir().unwrap();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path().join("settings.json");

    let mut settings = settings_for(out.path());
    settings.last_report_period = Some("2024-01".into());
    let path = report::generate_if_due(&conn, &mut settings, &cfg_path, d("2024-02-03"))
        .unwrap()
        .expect("new period, report due");
    assert!(path.ends_with("Report2024-01.txt"));
    assert_eq!(settings.last_report_period.as_deref(), Some("2024-02"));
}

#[test]
fn skipped_without_usable_export_path() {
    let conn = setup();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path().join("settings.json");

    let mut settings = Settings::default();
    assert!(
        report::generate_if_due(&conn, &mut settings, &cfg_path, d("2024-01-15"))
            .unwrap()
            .is_none()
    );

    settings.report_export_path = "/no/such/directory/anywhere".into();
    assert!(
        report::generate_if_due(&conn, &mut settings, &cfg_path, d("2024-01-15"))
            .unwrap()
            .is_none()
    );
    // Marker untouched when nothing was generated
    assert!(settings.last_report_period.is_none());
}

#[test]
fn january_report_covers_december_of_previous_year() {
    let conn = setup();
    let out = tempfile::tempdir().unwrap();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path().join("settings.json");
    let mut settings = settings_for(out.path());

    let path = report::generate_if_due(&conn, &mut settings, &cfg_path, d("2025-01-01"))
        .unwrap()
        .unwrap();
    assert!(path.ends_with("Report2024-12.txt"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Year: 2024"));
    assert!(content.contains("Month: 12"));
}

#[test]
fn render_lists_every_expense_category_with_totals() {
    let conn = setup();
    ledger::add(&conn, d("2024-03-01"), Kind::Expense, "Rent", "Bank", dec("700"), "").unwrap();
    ledger::add(&conn, d("2024-03-05"), Kind::Expense, "Groceries", "Bank", dec("80.25"), "").unwrap();
    ledger::add(&conn, d("2024-03-09"), Kind::Income, "Salary", "Bank", dec("2500"), "").unwrap();

    let summary = ledger::monthly_aggregate(&conn, 2024, 3).unwrap();
    let settings = Settings {
        monthly_budget: dec("1000"),
        currency_suffix: "EUR".into(),
        ..Settings::default()
    };
    let text = report::render(&summary, &settings);
    assert!(text.starts_with("FundTrack Monthly Report"));
    assert!(text.contains("Total Income: 2500 EUR"));
    assert!(text.contains("- Groceries: 80.25 EUR"));
    assert!(text.contains("- Rent: 700 EUR"));
    assert!(text.contains("Saved: 219.75 EUR"));
}

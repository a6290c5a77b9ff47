// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::config::Settings;
use crate::utils::{parse_decimal, pretty_table};

/// Every setter is a full-document read-modify-write: the caller hands in
/// the loaded document, the change is applied, the whole thing is saved.
pub fn handle(settings: &mut Settings, settings_path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["display_name".into(), settings.display_name.clone()],
                vec!["monthly_budget".into(), settings.monthly_budget.to_string()],
                vec!["currency_suffix".into(), settings.currency_suffix.clone()],
                vec!["theme_name".into(), settings.theme_name.clone()],
                vec![
                    "report_export_path".into(),
                    settings.report_export_path.clone(),
                ],
                vec![
                    "last_report_period".into(),
                    settings.last_report_period.clone().unwrap_or_default(),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-name", sub)) => {
            settings.display_name = sub.get_one::<String>("name").unwrap().clone();
            settings.save(settings_path)?;
            println!("Display name set to '{}'", settings.display_name);
        }
        Some(("set-budget", sub)) => {
            settings.monthly_budget = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            settings.save(settings_path)?;
            println!("Monthly budget set to {}", settings.monthly_budget);
        }
        Some(("set-currency", sub)) => {
            settings.currency_suffix = sub.get_one::<String>("suffix").unwrap().clone();
            settings.save(settings_path)?;
            println!("Currency suffix set to '{}'", settings.currency_suffix);
        }
        Some(("set-theme", sub)) => {
            settings.theme_name = sub.get_one::<String>("name").unwrap().clone();
            settings.save(settings_path)?;
            println!("Theme set to '{}'", settings.theme_name);
        }
        Some(("set-report-path", sub)) => {
            settings.report_export_path = sub.get_one::<String>("path").unwrap().clone();
            settings.save(settings_path)?;
            println!(
                "Reports will be written to '{}'",
                settings.report_export_path
            );
        }
        _ => {}
    }
    Ok(())
}

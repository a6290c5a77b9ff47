// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fundtrack::{cli, commands, config, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let settings_path = config::settings_path()?;
    let mut settings = config::Settings::load(&settings_path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("dashboard", _)) => {
            commands::dashboard::handle(&conn, &mut settings, &settings_path)?
        }
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("edit", sub)) => commands::edit::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut settings, &settings_path, sub)?,
        Some(("report", sub)) => {
            commands::report::handle(&conn, &mut settings, &settings_path, sub)?
        }
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn ids_arg() -> Arg {
    Arg::new("ids")
        .long("ids")
        .required(true)
        .help("Comma-separated transaction ids, e.g. 3,17,21")
}

pub fn build_cli() -> Command {
    Command::new("fundtrack")
        .about("Personal income/expense tracking, monthly summaries, and text reports")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(Command::new("dashboard").about("Greeting, budget summary, and recent transactions"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("kind").long("kind").required(true).help("income|expense"))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").default_value("")),
                )
                .subcommand(json_flags(
                    Command::new("history")
                        .about("Ordered transaction history")
                        .arg(Arg::new("sort").long("sort").default_value("date-desc").help(
                            "date-desc|date-asc|created-asc|created-desc|amount-desc|amount-asc|income-first|expense-first",
                        ))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Only the first N transactions"),
                        )
                        .arg(Arg::new("kind").long("kind").help("Restrict to income|expense")),
                )),
        )
        .subcommand(
            Command::new("edit")
                .about("Bulk-edit a selection of transactions")
                .subcommand(
                    Command::new("delete")
                        .about("Delete the selected transactions")
                        .arg(ids_arg()),
                )
                .subcommand(
                    Command::new("amount")
                        .about("Set a new amount on the selected transactions")
                        .arg(ids_arg())
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("kind")
                        .about("Flip income<->expense on the selected transactions")
                        .arg(ids_arg()),
                )
                .subcommand(
                    Command::new("category")
                        .about("Move the selected transactions to another category of their kind")
                        .arg(ids_arg())
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(
                    Command::new("date")
                        .about("Set a new date on the selected transactions")
                        .arg(ids_arg())
                        .arg(Arg::new("date").required(true).help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("description")
                        .about("Set a new description on the selected transactions")
                        .arg(ids_arg())
                        .arg(Arg::new("description").required(true)),
                ),
        )
        .subcommand(
            Command::new("category").about("Reference category sets").subcommand(
                Command::new("list")
                    .about("List categories")
                    .arg(Arg::new("kind").long("kind").help("income|expense")),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("Show and change settings")
                .subcommand(Command::new("show").about("Show current settings"))
                .subcommand(
                    Command::new("set-name")
                        .about("Set the display name")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("set-budget")
                        .about("Set the monthly budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the currency suffix")
                        .arg(Arg::new("suffix").required(true)),
                )
                .subcommand(
                    Command::new("set-theme")
                        .about("Set the theme name")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(
                    Command::new("set-report-path")
                        .about("Set the directory monthly reports are written to")
                        .arg(Arg::new("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly summaries and the periodic text report")
                .subcommand(Command::new("generate").about("Write last month's report if due"))
                .subcommand(json_flags(
                    Command::new("monthly")
                        .about("Income total and expense breakdown for one month")
                        .arg(Arg::new("month").required(true).help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("yearly")
                        .about("Per-month income/expense series for one year")
                        .arg(
                            Arg::new("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan the store for integrity issues"))
}

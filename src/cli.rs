// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, crate_version};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("skinflip")
        .version(crate_version!())
        .about("Resale profit calculator: buy in USD, sell in any supported currency after the seller fee")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Rate configuration file (defaults to the platform config dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable debug logging"),
        )
        .subcommand(
            output_flags(
                Command::new("calc")
                    .about("Compute profit for one buy/sell pair")
                    .arg(
                        Arg::new("buy")
                            .short('b')
                            .long("buy")
                            .required(true)
                            .allow_hyphen_values(true)
                            .help("Acquisition price in USD"),
                    )
                    .arg(
                        Arg::new("sell")
                            .short('s')
                            .long("sell")
                            .required(true)
                            .allow_hyphen_values(true)
                            .help("Sale price in the selected currency"),
                    )
                    .arg(
                        Arg::new("currency")
                            .short('c')
                            .long("currency")
                            .default_value("UAH")
                            .help("Currency of the sale price (USD, UAH, EUR, GBP, RUB)"),
                    ),
            )
            .arg(
                Arg::new("csv")
                    .long("csv")
                    .action(ArgAction::SetTrue)
                    .help("Print CSV with a header row"),
            )
            .group(
                ArgGroup::new("format")
                    .args(["json", "jsonl", "csv"])
                    .multiple(false),
            ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an amount between currencies via USD")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(Arg::new("from").long("from").required(true))
                .arg(Arg::new("to").long("to").default_value("USD")),
        )
        .subcommand(output_flags(
            Command::new("rates").about("Show the active currency rate table"),
        ))
        .subcommand(
            Command::new("config")
                .about("Inspect or create the rate configuration file")
                .subcommand(Command::new("path").about("Print the configuration file location"))
                .subcommand(Command::new("show").about("Print the active configuration as JSON"))
                .subcommand(
                    Command::new("init")
                        .about("Write the built-in rates to the configuration file")
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .action(ArgAction::SetTrue)
                                .help("Overwrite an existing file"),
                        ),
                ),
        )
        .subcommand(
            Command::new("interactive").about("Line-driven calculator form (type 'help')"),
        )
}

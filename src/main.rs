// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use skinflip::{cli, commands, config::Settings, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_flag("verbose"));
    let explicit = matches.get_one::<String>("config").map(PathBuf::from);
    let explicit = explicit.as_deref();

    match matches.subcommand() {
        Some(("calc", sub)) => commands::calc::handle(&Settings::load(explicit)?, sub)?,
        Some(("convert", sub)) => commands::convert::handle(&Settings::load(explicit)?, sub)?,
        Some(("rates", sub)) => commands::rates::handle(&Settings::load(explicit)?, sub)?,
        Some(("config", sub)) => commands::config::handle(explicit, sub)?,
        Some(("interactive", _)) => commands::interactive::handle(&Settings::load(explicit)?)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

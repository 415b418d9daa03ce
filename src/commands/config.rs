// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::{ConfigFile, Settings, config_path, write_default};

pub fn handle(explicit: Option<&Path>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("path", _)) => println!("{}", target_path(explicit)?.display()),
        Some(("show", _)) => println!(
            "{}",
            serde_json::to_string_pretty(&ConfigFile::from_settings(&Settings::load(explicit)?))?
        ),
        Some(("init", sub)) => {
            let path = target_path(explicit)?;
            write_default(&path, sub.get_flag("force"))?;
            println!("Wrote built-in rates to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => config_path(),
    }
}

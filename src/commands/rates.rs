// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::config::Settings;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateRow {
    pub currency: String,
    pub per_usd: String,
    pub as_of: String,
}

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let rows = rate_rows(settings);
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &rows)? {
        let data = rows
            .into_iter()
            .map(|r| vec![r.currency, r.per_usd, r.as_of])
            .collect();
        println!("{}", pretty_table(&["CCY", "Per 1 USD", "As of"], data));
        match &settings.source {
            Some(p) => println!("Source: {}", p.display()),
            None => println!("Source: built-in snapshot"),
        }
    }
    Ok(())
}

pub fn rate_rows(settings: &Settings) -> Vec<RateRow> {
    let as_of = settings.rates.as_of().to_string();
    settings
        .rates
        .entries()
        .into_iter()
        .map(|(c, r)| RateRow {
            currency: c.code().to_string(),
            per_usd: r.to_string(),
            as_of: as_of.clone(),
        })
        .collect()
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod config;
pub mod convert;
pub mod interactive;
pub mod rates;

use anyhow::Result;

use crate::currency::Currency;

pub(crate) fn currency_arg(m: &clap::ArgMatches, id: &str) -> Result<Currency> {
    let raw = m
        .get_one::<String>(id)
        .ok_or_else(|| anyhow::anyhow!("missing --{}", id))?;
    Ok(raw.parse::<Currency>()?)
}

pub(crate) fn string_arg<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a str> {
    m.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("missing --{}", id))
}

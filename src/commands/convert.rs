// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use super::{currency_arg, string_arg};
use crate::config::Settings;
use crate::currency::Currency;
use crate::utils::parse_price;

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let (amount, from, to, res) = convert_amount(settings, m)?;
    println!("{} {} -> {:.4} {}", amount, from, res.round_dp(4), to);
    Ok(())
}

pub fn convert_amount(
    settings: &Settings,
    m: &clap::ArgMatches,
) -> Result<(Decimal, Currency, Currency, Decimal)> {
    let amount = parse_price("amount", string_arg(m, "amount")?)?;
    let from = currency_arg(m, "from")?;
    let to = currency_arg(m, "to")?;
    let res = settings.rates.convert(amount, from, to)?;
    Ok((amount, from, to, res))
}

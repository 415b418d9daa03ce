// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use super::{currency_arg, string_arg};
use crate::config::Settings;
use crate::models::ProfitReport;
use crate::utils::{fmt_2dp, pretty_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
    JsonLines,
    Csv,
}

impl Format {
    pub fn from_matches(m: &clap::ArgMatches) -> Format {
        if m.get_flag("json") {
            Format::Json
        } else if m.get_flag("jsonl") {
            Format::JsonLines
        } else if m.get_flag("csv") {
            Format::Csv
        } else {
            Format::Table
        }
    }
}

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let report = run(settings, m)?;
    print!("{}", render(&report, Format::from_matches(m))?);
    Ok(())
}

/// Parse the arguments of `calc` and compute the report.
pub fn run(settings: &Settings, m: &clap::ArgMatches) -> Result<ProfitReport> {
    let buy = string_arg(m, "buy")?;
    let sell = string_arg(m, "sell")?;
    let currency = currency_arg(m, "currency")?;
    let calc = settings.calculator()?;
    Ok(calc.compute_profit(buy, sell, currency)?)
}

pub fn render(report: &ProfitReport, format: Format) -> Result<String> {
    let f = report.formatted();
    let out = match format {
        Format::Json => format!("{}\n", serde_json::to_string_pretty(&f)?),
        Format::JsonLines => format!("{}\n", serde_json::to_string(&f)?),
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            wtr.write_record([
                "currency",
                "source_price_usd",
                "target_price_usd",
                "proceeds_before_fee",
                "proceeds_after_fee",
                "profit_usd",
                "profit_in_selected_currency",
                "profit_percentage",
                "outcome",
            ])?;
            wtr.write_record([
                f.currency.code(),
                f.source_price_usd.as_str(),
                f.target_price_usd.as_str(),
                f.proceeds.before_fee.as_str(),
                f.proceeds.after_fee.as_str(),
                f.instant_sale.profit_usd.as_str(),
                f.instant_sale.profit_in_selected_currency.as_str(),
                f.instant_sale.profit_percentage.as_str(),
                f.outcome.label(),
            ])?;
            String::from_utf8(wtr.into_inner()?)?
        }
        Format::Table => {
            let ccy = f.currency.code();
            let fee = fmt_2dp(&(report.fee_rate * Decimal::ONE_HUNDRED));
            let pct = match report.profit_percentage {
                Some(_) => format!("{}%", f.instant_sale.profit_percentage),
                None => f.instant_sale.profit_percentage.clone(),
            };
            let rows = vec![
                vec!["Buy price (USD)".into(), f.source_price_usd.clone()],
                vec!["Sell price (USD)".into(), f.target_price_usd.clone()],
                vec!["Seller fee".into(), format!("{}%", fee)],
                vec!["Proceeds before fee (USD)".into(), f.proceeds.before_fee.clone()],
                vec!["Proceeds after fee (USD)".into(), f.proceeds.after_fee.clone()],
                vec!["Profit (USD)".into(), f.instant_sale.profit_usd.clone()],
                vec![
                    format!("Profit ({})", ccy),
                    f.instant_sale.profit_in_selected_currency.clone(),
                ],
                vec!["Profit %".into(), pct],
                vec!["Outcome".into(), f.outcome.label().to_string()],
            ];
            format!("{}\n", pretty_table(&["Instant sale", "Value"], rows))
        }
    };
    Ok(out)
}

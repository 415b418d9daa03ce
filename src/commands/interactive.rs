// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::debug;

use super::calc::{Format, render};
use crate::calculator::Calculator;
use crate::config::Settings;
use crate::currency::Currency;
use crate::session::CalculatorSession;

const HELP: &str = "\
commands:
  buy <price>       acquisition price in USD
  sell <price>      sale price in the selected currency
  currency <code>   USD, UAH, EUR, GBP or RUB
  calc              compute profit for the current inputs
  show              print inputs and the last result
  clear             reset inputs and result
  help              this text
  quit              leave";

pub fn handle(settings: &Settings) -> Result<()> {
    let calc = settings.calculator()?;
    let mut session = CalculatorSession::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "skinflip interactive, type 'help' for commands")?;
    run(&calc, &mut session, stdin.lock(), &mut stdout)
}

/// Drive `session` from line-oriented input until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(
    calc: &Calculator,
    session: &mut CalculatorSession,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next().map(str::trim).unwrap_or("");
        debug!("interactive command {:?} {:?}", cmd, arg);
        match cmd.as_str() {
            "" => continue,
            "buy" => session.set_source_price(arg),
            "sell" => session.set_target_price(arg),
            "currency" => match arg.parse::<Currency>() {
                Ok(c) => session.set_currency(c),
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            "calc" => match session.calculate(calc) {
                Ok(report) => write!(out, "{}", render(report, Format::Table)?)?,
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            "show" => {
                writeln!(
                    out,
                    "buy={:?} sell={:?} currency={}",
                    session.source_price(),
                    session.target_price(),
                    session.currency()
                )?;
                match session.last_report() {
                    Some(report) => write!(out, "{}", render(report, Format::Table)?)?,
                    None => writeln!(out, "no result yet")?,
                }
            }
            "clear" => session.clear(),
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command '{}', type 'help'", other)?,
        }
    }
    Ok(())
}

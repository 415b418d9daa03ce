// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CalcError, CalcResult};

static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
        .expect("valid price pattern")
});

/// Parse a user-entered price. Accepts plain decimals ("12.5", "-3", "+7",
/// ".5") and scientific notation ("1.5e2"); anything else is an invalid
/// price. Non-zero values that `Decimal` cannot hold, either too large or
/// so small they would round to zero, are out of range.
pub fn parse_price(field: &'static str, raw: &str) -> CalcResult<Decimal> {
    let s = raw.trim();
    let invalid = || CalcError::InvalidPrice {
        field,
        input: raw.to_string(),
    };
    let out_of_range = || CalcError::PriceOutOfRange {
        field,
        input: raw.to_string(),
    };

    let caps = PRICE_RE.captures(s).ok_or_else(invalid)?;
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let int = caps.get(2).map_or("", |m| m.as_str());
    let frac = caps.get(3).map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if int.chars().chain(frac.chars()).all(|c| c == '0') {
        return Ok(Decimal::ZERO);
    }

    let mut mantissa = format!("{}{}", sign, if int.is_empty() { "0" } else { int });
    if !frac.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac);
    }
    let mut d = mantissa.parse::<Decimal>().map_err(|_| out_of_range())?;

    if let Some(exp) = caps.get(4) {
        let exp: i32 = exp.as_str().parse().map_err(|_| out_of_range())?;
        if exp.unsigned_abs() > MAX_EXPONENT {
            return Err(out_of_range());
        }
        for _ in 0..exp.unsigned_abs() {
            d = if exp > 0 {
                d.checked_mul(Decimal::TEN)
            } else {
                d.checked_div(Decimal::TEN)
            }
            .ok_or_else(out_of_range)?;
        }
    }

    // a non-zero literal that rounded away
    if d.is_zero() {
        return Err(out_of_range());
    }
    Ok(d)
}

// Beyond this no non-zero mantissa can land inside the Decimal range.
const MAX_EXPONENT: u32 = 64;

/// Round half away from zero to exactly two fraction digits.
pub fn round_2dp(d: Decimal) -> Decimal {
    let mut r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    r.rescale(2);
    if r.is_zero() {
        r.set_sign_positive(true);
    }
    r
}

pub fn fmt_2dp(d: &Decimal) -> String {
    round_2dp(*d).to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::utils::{fmt_2dp, parse_price, round_2dp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    UAH,
    EUR,
    GBP,
    RUB,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::UAH,
        Currency::EUR,
        Currency::GBP,
        Currency::RUB,
    ];

    /// The unit every price is normalized to before any arithmetic.
    pub const REFERENCE: Currency = Currency::USD;

    pub fn code(self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::UAH => "UAH",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::RUB => "RUB",
        }
    }

    fn index(self) -> usize {
        match self {
            Currency::USD => 0,
            Currency::UAH => 1,
            Currency::EUR => 2,
            Currency::GBP => 3,
            Currency::RUB => 4,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| CalcError::UnknownCurrency(s.trim().to_string()))
    }
}

/// Built-in snapshot, units of each currency per 1 USD.
pub static BUILTIN_RATES: Lazy<RateTable> = Lazy::new(|| RateTable {
    as_of: NaiveDate::from_ymd_opt(2024, 12, 1).expect("valid snapshot date"),
    rates: [
        Decimal::ONE,
        Decimal::new(3892, 2),
        Decimal::new(92, 2),
        Decimal::new(79, 2),
        Decimal::new(9050, 2),
    ],
});

/// Immutable mapping from currency to "units per 1 USD".
///
/// Every currency always has a rate, USD is always exactly 1 and every
/// rate is positive. The only way to obtain a table is the built-in
/// snapshot or [`RateTable::with_overrides`], which enforces all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    as_of: NaiveDate,
    rates: [Decimal; 5],
}

impl Default for RateTable {
    fn default() -> Self {
        BUILTIN_RATES.clone()
    }
}

impl RateTable {
    pub fn builtin() -> &'static RateTable {
        &BUILTIN_RATES
    }

    /// Derive a new table from this one, replacing the given rates.
    pub fn with_overrides<I>(&self, as_of: Option<NaiveDate>, overrides: I) -> CalcResult<RateTable>
    where
        I: IntoIterator<Item = (Currency, Decimal)>,
    {
        let mut rates = self.rates;
        for (ccy, rate) in overrides {
            if ccy == Currency::REFERENCE {
                if rate != Decimal::ONE {
                    return Err(CalcError::InvalidReferenceRate(rate));
                }
                continue;
            }
            if rate <= Decimal::ZERO {
                return Err(CalcError::InvalidRate {
                    currency: ccy,
                    rate,
                });
            }
            rates[ccy.index()] = rate;
        }
        Ok(RateTable {
            as_of: as_of.unwrap_or(self.as_of),
            rates,
        })
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn rate(&self, ccy: Currency) -> Decimal {
        self.rates[ccy.index()]
    }

    pub fn entries(&self) -> Vec<(Currency, Decimal)> {
        Currency::ALL.into_iter().map(|c| (c, self.rate(c))).collect()
    }

    /// Convert an amount denominated in `from` into USD.
    pub fn to_reference(&self, amount: Decimal, from: Currency) -> CalcResult<Decimal> {
        amount
            .checked_div(self.rate(from))
            .ok_or(CalcError::Overflow("reference amount"))
    }

    /// String entry point for [`RateTable::to_reference`]. Unparsable input
    /// is rejected rather than treated as zero.
    pub fn to_reference_str(&self, raw: &str, from: Currency) -> CalcResult<Decimal> {
        let amount = parse_price("amount", raw)?;
        self.to_reference(amount, from)
    }

    /// Convert a USD amount into `to`, rounded to 2 decimals.
    pub fn from_reference_value(&self, amount_usd: Decimal, to: Currency) -> CalcResult<Decimal> {
        amount_usd
            .checked_mul(self.rate(to))
            .map(round_2dp)
            .ok_or(CalcError::Overflow("converted amount"))
    }

    /// Convert a USD amount into `to` and format it with exactly two
    /// fraction digits.
    pub fn from_reference(&self, amount_usd: Decimal, to: Currency) -> CalcResult<String> {
        self.from_reference_value(amount_usd, to).map(|d| fmt_2dp(&d))
    }

    /// Cross conversion through the USD hub, unrounded.
    pub fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> CalcResult<Decimal> {
        if from == to {
            return Ok(amount);
        }
        let usd = self.to_reference(amount, from)?;
        usd.checked_mul(self.rate(to))
            .ok_or(CalcError::Overflow("converted amount"))
    }
}

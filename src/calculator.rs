// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::currency::{Currency, RateTable};
use crate::error::{CalcError, CalcResult};
use crate::models::ProfitReport;
use crate::utils::{parse_price, round_2dp};

/// Cut the selling marketplace keeps from every sale (13%).
pub const DEFAULT_FEE_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Profit calculator bound to a rate table and a seller fee.
///
/// The acquisition side is always in USD and never pays a fee; the sale
/// side is denominated in the selected currency and pays `fee_rate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    rates: RateTable,
    fee_rate: Decimal,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            rates: RateTable::default(),
            fee_rate: DEFAULT_FEE_RATE,
        }
    }
}

impl Calculator {
    pub fn new(rates: RateTable, fee_rate: Decimal) -> CalcResult<Self> {
        if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
            return Err(CalcError::InvalidFeeRate(fee_rate));
        }
        Ok(Calculator { rates, fee_rate })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Compute the report for buying at `source_price` USD and selling at
    /// `target_price` in `currency`. Both inputs must parse as finite
    /// numbers; nothing is computed otherwise.
    pub fn compute_profit(
        &self,
        source_price: &str,
        target_price: &str,
        currency: Currency,
    ) -> CalcResult<ProfitReport> {
        let source_price_usd = parse_price("source price", source_price)?;
        let target_price = parse_price("target price", target_price)?;
        self.compute(source_price_usd, target_price, currency)
    }

    /// Same as [`Calculator::compute_profit`] for already-parsed prices.
    pub fn compute(
        &self,
        source_price_usd: Decimal,
        target_price: Decimal,
        currency: Currency,
    ) -> CalcResult<ProfitReport> {
        let target_price_usd = self.rates.to_reference(target_price, currency)?;

        let proceeds_before_fee = target_price_usd;
        let proceeds_after_fee = target_price_usd
            .checked_mul(Decimal::ONE - self.fee_rate)
            .ok_or(CalcError::Overflow("proceeds after fee"))?;
        let profit_usd = proceeds_after_fee
            .checked_sub(source_price_usd)
            .ok_or(CalcError::Overflow("profit"))?;

        // undefined for a zero price, and unrepresentable for a price so
        // small that the ratio leaves the Decimal range
        let profit_percentage = if source_price_usd.is_zero() {
            None
        } else {
            let pct = profit_usd
                .checked_div(source_price_usd)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED));
            if pct.is_none() {
                warn!(
                    "profit percentage for {} USD on {} USD is out of range",
                    profit_usd, source_price_usd
                );
            }
            pct.map(round_2dp)
        };

        let profit_in_selected_currency = self.rates.from_reference_value(profit_usd, currency)?;

        debug!(
            "buy {} USD, sell {} {} ({} USD) -> profit {} USD, {:?}%",
            source_price_usd, target_price, currency, target_price_usd, profit_usd, profit_percentage
        );

        Ok(ProfitReport {
            currency,
            fee_rate: self.fee_rate,
            source_price_usd,
            target_price_usd,
            proceeds_before_fee,
            proceeds_after_fee,
            profit_usd,
            profit_in_selected_currency,
            profit_percentage,
        })
    }
}

/// Compute a report with the built-in rate table and the default fee.
pub fn compute_profit(
    source_price: &str,
    target_price: &str,
    currency: Currency,
) -> CalcResult<ProfitReport> {
    Calculator::default().compute_profit(source_price, target_price, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fee_is_thirteen_percent() {
        assert_eq!(DEFAULT_FEE_RATE.to_string(), "0.13");
    }

    #[test]
    fn fee_rate_bounds() {
        let rates = RateTable::default();
        assert!(Calculator::new(rates.clone(), Decimal::ZERO).is_ok());
        assert!(matches!(
            Calculator::new(rates.clone(), Decimal::ONE),
            Err(CalcError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            Calculator::new(rates, Decimal::new(-1, 2)),
            Err(CalcError::InvalidFeeRate(_))
        ));
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::utils::fmt_2dp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Gain,
    Loss,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Gain => "gain",
            Outcome::Loss => "loss",
        }
    }
}

/// Result of one profit calculation. All `*_usd` and proceeds figures are
/// in USD at full precision; the two derived figures are rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub currency: Currency,
    pub fee_rate: Decimal,
    pub source_price_usd: Decimal,
    pub target_price_usd: Decimal,
    pub proceeds_before_fee: Decimal,
    pub proceeds_after_fee: Decimal,
    pub profit_usd: Decimal,
    pub profit_in_selected_currency: Decimal,
    /// `None` when the acquisition price is zero or the ratio does not fit
    /// in a `Decimal`.
    pub profit_percentage: Option<Decimal>,
}

impl ProfitReport {
    pub fn outcome(&self) -> Outcome {
        if self.profit_usd >= Decimal::ZERO {
            Outcome::Gain
        } else {
            Outcome::Loss
        }
    }

    pub fn formatted(&self) -> FormattedReport {
        FormattedReport {
            currency: self.currency,
            source_price_usd: fmt_2dp(&self.source_price_usd),
            target_price_usd: fmt_2dp(&self.target_price_usd),
            proceeds: FormattedProceeds {
                before_fee: fmt_2dp(&self.proceeds_before_fee),
                after_fee: fmt_2dp(&self.proceeds_after_fee),
            },
            instant_sale: FormattedProfit {
                profit_usd: fmt_2dp(&self.profit_usd),
                profit_in_selected_currency: fmt_2dp(&self.profit_in_selected_currency),
                profit_percentage: self
                    .profit_percentage
                    .as_ref()
                    .map(fmt_2dp)
                    .unwrap_or_else(|| UNDEFINED_PERCENTAGE.to_string()),
            },
            outcome: self.outcome(),
        }
    }
}

pub const UNDEFINED_PERCENTAGE: &str = "undefined";

/// Display projection of a [`ProfitReport`]: every figure carries exactly
/// two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedReport {
    pub currency: Currency,
    #[serde(rename = "sourcePriceUSD")]
    pub source_price_usd: String,
    #[serde(rename = "targetPriceUSD")]
    pub target_price_usd: String,
    pub proceeds: FormattedProceeds,
    pub instant_sale: FormattedProfit,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProceeds {
    pub before_fee: String,
    pub after_fee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProfit {
    #[serde(rename = "profitUSD")]
    pub profit_usd: String,
    pub profit_in_selected_currency: String,
    pub profit_percentage: String,
}

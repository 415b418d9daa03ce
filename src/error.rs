// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::Currency;

/// Errors raised by the calculation core and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid price input: {field} '{input}' is not a finite number")]
    InvalidPrice { field: &'static str, input: String },

    #[error("invalid price input: {field} '{input}' is outside the supported range")]
    PriceOutOfRange { field: &'static str, input: String },

    #[error("unknown currency '{0}' (expected one of USD, UAH, EUR, GBP, RUB)")]
    UnknownCurrency(String),

    #[error("invalid rate {rate} for {currency}: rates must be positive")]
    InvalidRate { currency: Currency, rate: Decimal },

    #[error("USD is the reference currency and must have rate 1, got {0}")]
    InvalidReferenceRate(Decimal),

    #[error("invalid fee rate {0}: expected a value in [0, 1)")]
    InvalidFeeRate(Decimal),

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl CalcError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidPrice { .. } | CalcError::PriceOutOfRange { .. }
        )
    }
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;

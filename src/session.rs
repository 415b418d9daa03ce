// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calculator::Calculator;
use crate::currency::Currency;
use crate::error::CalcResult;
use crate::models::ProfitReport;

/// Form state owned by the front end: the two raw price inputs, the
/// selected currency and the report currently on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorSession {
    source_input: String,
    target_input: String,
    currency: Currency,
    last_report: Option<ProfitReport>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        CalculatorSession::new(Currency::UAH)
    }
}

impl CalculatorSession {
    pub fn new(currency: Currency) -> Self {
        CalculatorSession {
            source_input: String::new(),
            target_input: String::new(),
            currency,
            last_report: None,
        }
    }

    pub fn set_source_price(&mut self, raw: impl Into<String>) {
        self.source_input = raw.into();
    }

    pub fn set_target_price(&mut self, raw: impl Into<String>) {
        self.target_input = raw.into();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn source_price(&self) -> &str {
        &self.source_input
    }

    pub fn target_price(&self) -> &str {
        &self.target_input
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn last_report(&self) -> Option<&ProfitReport> {
        self.last_report.as_ref()
    }

    /// Run the calculator on the current inputs. A failed calculation
    /// leaves the previously displayed report in place.
    pub fn calculate(&mut self, calc: &Calculator) -> CalcResult<&ProfitReport> {
        let report = calc.compute_profit(&self.source_input, &self.target_input, self.currency)?;
        Ok(&*self.last_report.insert(report))
    }

    pub fn clear(&mut self) {
        self.source_input.clear();
        self.target_input.clear();
        self.last_report = None;
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod currency;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod utils;

pub use calculator::{Calculator, compute_profit};
pub use currency::{Currency, RateTable};
pub use error::CalcError;
pub use models::{Outcome, ProfitReport};
pub use session::CalculatorSession;

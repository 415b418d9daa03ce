// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use directories::ProjectDirs;
use log::{debug, info};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, DEFAULT_FEE_RATE};
use crate::currency::{Currency, RateTable};
use crate::error::CalcResult;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Skinflip", "skinflip"));

const CONFIG_FILE: &str = "rates.json";

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join(CONFIG_FILE))
}

/// On-disk rate configuration. Every key is optional; missing currencies
/// keep their built-in rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<Decimal>,
    #[serde(default)]
    pub rates: BTreeMap<String, Decimal>,
}

impl ConfigFile {
    pub fn from_settings(settings: &Settings) -> Self {
        ConfigFile {
            as_of: Some(settings.rates.as_of()),
            fee_rate: Some(settings.fee_rate),
            rates: settings
                .rates
                .entries()
                .into_iter()
                .map(|(c, r)| (c.code().to_string(), r))
                .collect(),
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    fn resolve(&self) -> CalcResult<(RateTable, Decimal)> {
        let mut overrides = Vec::with_capacity(self.rates.len());
        for (code, rate) in &self.rates {
            overrides.push((code.parse::<Currency>()?, *rate));
        }
        let rates = RateTable::builtin().with_overrides(self.as_of, overrides)?;
        let fee_rate = self.fee_rate.unwrap_or(DEFAULT_FEE_RATE);
        // validates the fee
        Calculator::new(rates.clone(), fee_rate)?;
        Ok((rates, fee_rate))
    }
}

/// Active configuration: the rate table and fee the calculator runs with,
/// and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rates: RateTable,
    pub fee_rate: Decimal,
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rates: RateTable::default(),
            fee_rate: DEFAULT_FEE_RATE,
            source: None,
        }
    }
}

impl Settings {
    /// Load settings. An explicit path must exist; the default location is
    /// optional and falls back to the built-in snapshot.
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        if let Some(p) = explicit {
            return Settings::from_file(p);
        }
        let path = config_path()?;
        if path.exists() {
            Settings::from_file(&path)
        } else {
            debug!("no config at {}, using built-in rates", path.display());
            Ok(Settings::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Settings> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let file = ConfigFile::parse(&raw)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        let (rates, fee_rate) = file
            .resolve()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        info!(
            "loaded rates as of {} from {} (fee {})",
            rates.as_of(),
            path.display(),
            fee_rate
        );
        Ok(Settings {
            rates,
            fee_rate,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn calculator(&self) -> CalcResult<Calculator> {
        Calculator::new(self.rates.clone(), self.fee_rate)
    }
}

/// Write the built-in snapshot to `path` as a starting point for edits.
pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    let body = serde_json::to_string_pretty(&ConfigFile::from_settings(&Settings::default()))?;
    fs::write(path, body).with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}

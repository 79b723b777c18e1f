// ⚙️ Validator Configuration
// Loaded from JSON, optionally overridden from the environment

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Environment variable that pins the year used for age checks
pub const REFERENCE_YEAR_ENV: &str = "CUSTOMER_VALIDATION_YEAR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Year used as "now" for age checks (None = today's local year)
    pub reference_year: Option<i32>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed reference year, for reproducible runs
    pub fn with_reference_year(year: i32) -> Self {
        ValidatorConfig {
            reference_year: Some(year),
        }
    }

    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: ValidatorConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// Apply `CUSTOMER_VALIDATION_YEAR` if set; unparseable values are ignored
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(REFERENCE_YEAR_ENV) {
            Ok(value) => self.with_year_override(&value),
            Err(_) => self,
        }
    }

    fn with_year_override(mut self, value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(year) => self.reference_year = Some(year),
            Err(_) => warn!(
                variable = REFERENCE_YEAR_ENV,
                value, "ignoring non-numeric reference year"
            ),
        }
        self
    }

    /// Year the age rule compares against
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }
}

// ============================================================================
// TESTS
// ============================================================================

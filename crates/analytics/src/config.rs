//! Analytics thresholds.
//!
//! Defaults match the warehouse policy (high value = 1000, warn above 70 %,
//! at least two categories). Deployments can override them through
//! environment variables; unset variables keep the default.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const HIGH_VALUE_THRESHOLD_VAR: &str = "WAREHOUSE_HIGH_VALUE_THRESHOLD";
pub const HIGH_VALUE_WARNING_PERCENT_VAR: &str = "WAREHOUSE_HIGH_VALUE_WARNING_PERCENT";
pub const MIN_CATEGORY_DIVERSITY_VAR: &str = "WAREHOUSE_MIN_CATEGORY_DIVERSITY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Thresholds used by inventory constraint validation.
///
/// Deserialization fills missing fields with defaults and then runs
/// [`AnalyticsConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsConfig {
    /// Products priced at or above this count as high value.
    pub high_value_threshold: Decimal,
    /// Warn when the high-value share is strictly above this percentage.
    pub high_value_warning_percentage: f64,
    /// Minimum number of distinct categories for a diverse inventory.
    pub minimum_category_diversity: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: Decimal::from(1000),
            high_value_warning_percentage: 70.0,
            minimum_category_diversity: 2,
        }
    }
}

/// Unvalidated wire form of [`AnalyticsConfig`].
#[derive(Deserialize)]
#[serde(default)]
struct ConfigDocument {
    high_value_threshold: Decimal,
    high_value_warning_percentage: f64,
    minimum_category_diversity: usize,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        let defaults = AnalyticsConfig::default();
        Self {
            high_value_threshold: defaults.high_value_threshold,
            high_value_warning_percentage: defaults.high_value_warning_percentage,
            minimum_category_diversity: defaults.minimum_category_diversity,
        }
    }
}

impl<'de> Deserialize<'de> for AnalyticsConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = ConfigDocument::deserialize(deserializer)?;
        let config = Self {
            high_value_threshold: doc.high_value_threshold,
            high_value_warning_percentage: doc.high_value_warning_percentage,
            minimum_category_diversity: doc.minimum_category_diversity,
        };
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }
}

impl AnalyticsConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(threshold) = parse_var::<Decimal>(&lookup, HIGH_VALUE_THRESHOLD_VAR)? {
            config.high_value_threshold = threshold;
        }
        if let Some(percentage) = parse_var::<f64>(&lookup, HIGH_VALUE_WARNING_PERCENT_VAR)? {
            config.high_value_warning_percentage = percentage;
        }
        if let Some(diversity) = parse_var::<usize>(&lookup, MIN_CATEGORY_DIVERSITY_VAR)? {
            config.minimum_category_diversity = diversity;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high_value_threshold < Decimal::ZERO {
            return Err(ConfigError::Invalid {
                key: HIGH_VALUE_THRESHOLD_VAR,
                value: self.high_value_threshold.to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        let pct = self.high_value_warning_percentage;
        if !(pct.is_finite() && (0.0..=100.0).contains(&pct)) {
            return Err(ConfigError::Invalid {
                key: HIGH_VALUE_WARNING_PERCENT_VAR,
                value: pct.to_string(),
                reason: "must be between 0 and 100".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable           | Meaning                         | Default |
//! |--------------------|---------------------------------|---------|
//! | `GROCERY_TAX_RATE` | Tax rate as a fraction          | `0.07`  |
//! | `GROCERY_DISCOUNT` | Discount as a fraction, 0 = off | `0.10`  |
//! | `GROCERY_OUTPUT`   | `text` or `json`                | `text`  |

use std::env;
use std::str::FromStr;

use grocery_core::{Discount, TaxCalculator};

pub const TAX_RATE_VAR: &str = "GROCERY_TAX_RATE";
pub const DISCOUNT_VAR: &str = "GROCERY_DISCOUNT";
pub const OUTPUT_VAR: &str = "GROCERY_OUTPUT";

/// How the receipt is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain receipt text
    #[default]
    Text,
    /// Items and totals as a JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(OUTPUT_VAR.to_string())),
        }
    }
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Tax rate applied to the discounted total
    pub tax_rate: f64,

    /// Percentage discount as a fraction; zero means no discount
    pub discount: f64,

    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            tax_rate: 0.07,
            discount: 0.10,
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DemoConfig::default();

        Ok(DemoConfig {
            tax_rate: parse_or(&lookup, TAX_RATE_VAR, defaults.tax_rate)?,
            discount: parse_or(&lookup, DISCOUNT_VAR, defaults.discount)?,
            output: parse_or(&lookup, OUTPUT_VAR, defaults.output)?,
        })
    }

    pub fn tax_calculator(&self) -> TaxCalculator {
        TaxCalculator::new(self.tax_rate)
    }

    pub fn discount(&self) -> Discount {
        if self.discount == 0.0 {
            Discount::NoDiscount
        } else {
            Discount::percentage(self.discount)
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

//! # Payout Configuration
//!
//! A payout request can be described in JSON, with every field optional.
//! Missing fields fall back to the same defaults a blank form starts with.
//!
//! ```rust
//! use rs_payouts::config::PayoutConfig;
//! use rs_payouts::core::PayoutType;
//!
//! let json = r#"{"pool": 100, "minimum": 5, "payout_type": "double_elim"}"#;
//! let config = PayoutConfig::from_json(json).unwrap();
//! assert_eq!(PayoutType::DoubleElim, config.payout_type);
//!
//! let payouts = config.resolve().unwrap();
//! assert_eq!(6, payouts.len());
//! assert_eq!("5th/6th", payouts[5].place);
//!
//! // Anything left out takes the default.
//! let config = PayoutConfig::from_json("{}").unwrap();
//! assert_eq!(160.0, config.pool);
//! assert_eq!(20.0, config.minimum);
//! ```
//!
//! ## Fields
//!
//! - `pool` - Total to pay out. Default 160.
//! - `minimum` - Smallest payout allowed. Default 20.
//! - `payout_type` - `ranked` or `double_elim`. Default `ranked`.

use std::{io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Payout, PayoutType, RSPayoutError};
use crate::resolve::PayoutRequest;

/// Configuration for one payout calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// Total entry fees collected.
    #[serde(default = "default_pool")]
    pub pool: f64,
    /// No place may be paid less than this.
    #[serde(default = "default_minimum")]
    pub minimum: f64,
    #[serde(default)]
    pub payout_type: PayoutType,
}

fn default_pool() -> f64 {
    160.0
}

fn default_minimum() -> f64 {
    20.0
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            pool: default_pool(),
            minimum: default_minimum(),
            payout_type: PayoutType::default(),
        }
    }
}

/// Errors that can occur loading a payout configuration
#[derive(Debug, Error)]
pub enum PayoutConfigError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] RSPayoutError),
}

impl PayoutConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, PayoutConfigError> {
        let config: PayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PayoutConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, PayoutConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(PayoutConfigError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }

    /// Validate that the pool and minimum can be paid.
    pub fn validate(&self) -> Result<(), PayoutConfigError> {
        self.request().map(|_| ())
    }

    pub fn request(&self) -> Result<PayoutRequest, PayoutConfigError> {
        Ok(PayoutRequest::new(
            self.payout_type,
            self.pool,
            self.minimum,
        )?)
    }

    /// Compute the payouts using the standard tables.
    pub fn resolve(&self) -> Result<Vec<Payout>, PayoutConfigError> {
        Ok(self.request()?.resolve())
    }
}

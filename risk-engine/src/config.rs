//! Scoring configuration

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Amount at or above which the very-high tier applies (COP)
    pub very_high_amount: Decimal,

    /// Amount at or above which the high tier applies (COP)
    pub high_amount: Decimal,

    /// Per-rule score weights
    pub weights: RuleWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            very_high_amount: Decimal::from(20_000_000), // 20M COP
            high_amount: Decimal::from(5_000_000),       // 5M COP
            weights: RuleWeights::default(),
        }
    }
}

/// Score contribution of each rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleWeights {
    /// Very-high amount tier
    pub very_high_amount: u8,

    /// High amount tier
    pub high_amount: u8,

    /// International transfer
    pub international: u8,

    /// New beneficiary account
    pub new_beneficiary: u8,

    /// Unusual hour for the customer
    pub unusual_hour: u8,

    /// Unrecognized device
    pub new_device: u8,

    /// High-risk destination jurisdiction
    pub high_risk_country: u8,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            very_high_amount: 40,
            high_amount: 25,
            international: 25,
            new_beneficiary: 15,
            unusual_hour: 10,
            new_device: 10,
            high_risk_country: 15,
        }
    }
}

impl ScoringConfig {
    /// Load from TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoringConfig = toml::from_str(&content)
            .map_err(|e| Error::ConfigParse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate threshold ordering
    pub fn validate(&self) -> Result<()> {
        if self.high_amount > self.very_high_amount {
            return Err(Error::InvalidConfig(format!(
                "High amount tier {} exceeds very-high tier {}",
                self.high_amount, self.very_high_amount
            )));
        }
        if self.high_amount <= Decimal::ZERO {
            return Err(Error::InvalidConfig(
                "High amount tier must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

//! Core types for risk engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Create new risk score (0-100)
    pub fn new(score: u8) -> Self {
        Self(score.min(100))
    }

    /// Get raw score
    pub fn score(&self) -> u8 {
        self.0
    }

    /// Check if high risk (>= 70)
    pub fn is_high_risk(&self) -> bool {
        self.0 >= 70
    }

    /// Check if medium risk (40-69)
    pub fn is_medium_risk(&self) -> bool {
        (40..70).contains(&self.0)
    }

    /// Check if low risk (< 40)
    pub fn is_low_risk(&self) -> bool {
        self.0 < 40
    }
}

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Display name for the level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RiskScore> for RiskLevel {
    fn from(score: RiskScore) -> Self {
        if score.is_high_risk() {
            RiskLevel::High
        } else if score.is_medium_risk() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// One bank transfer to be risk-scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer amount (COP)
    pub amount: Decimal,

    /// Destination country code (trimmed, uppercase)
    pub destination_country: String,

    /// Origination channel (mobile app, web, ATM...), not scored yet
    pub channel: String,

    /// Beneficiary account never paid before
    pub is_new_beneficiary: bool,

    /// Transfer leaves the account's home country
    pub is_international: bool,

    /// Outside the customer's usual hours
    pub is_unusual_hour: bool,

    /// Device the customer has never used
    pub is_new_device: bool,
}

impl Transfer {
    /// Build a transfer from raw front-end input.
    ///
    /// Unparseable amounts normalize to zero, the country code is trimmed
    /// and upper-cased, the channel is trimmed.
    pub fn from_raw(
        amount_text: &str,
        destination_country: &str,
        channel: &str,
        is_new_beneficiary: bool,
        is_international: bool,
        is_unusual_hour: bool,
        is_new_device: bool,
    ) -> Self {
        Self {
            amount: amount_text.trim().parse().unwrap_or(Decimal::ZERO),
            destination_country: destination_country.trim().to_uppercase(),
            channel: channel.trim().to_string(),
            is_new_beneficiary,
            is_international,
            is_unusual_hour,
            is_new_device,
        }
    }
}

/// Risk evaluation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Risk score
    pub score: RiskScore,

    /// Risk level
    pub level: RiskLevel,

    /// Risk factors detected (never empty)
    pub reasons: Vec<String>,

    /// Recommended actions (never empty)
    pub recommendations: Vec<String>,
}

//! Risk scoring engine

use crate::{JurisdictionList, RiskLevel, RiskResult, RiskScore, ScoringConfig, Transfer};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Risk scorer
pub struct RiskScorer {
    config: ScoringConfig,
    jurisdictions: JurisdictionList,
}

impl RiskScorer {
    /// Create new risk scorer
    pub fn new(config: ScoringConfig, jurisdictions: JurisdictionList) -> Self {
        Self {
            config,
            jurisdictions,
        }
    }

    /// Evaluate fraud risk for a transfer
    ///
    /// Pure and infallible: identical inputs produce identical results, and
    /// the returned reasons and recommendations are never empty.
    pub fn evaluate(&self, transfer: &Transfer) -> RiskResult {
        let weights = &self.config.weights;
        let mut score = 0u16;
        let mut reasons = Vec::new();
        let mut recommendations = Vec::new();

        // Rule 1: amount tier (highest matching tier wins)
        if transfer.amount >= self.config.very_high_amount {
            score += u16::from(weights.very_high_amount);
            reasons.push(format!("Very high amount ({} COP).", transfer.amount));
            recommendations.push("Apply double verification with the customer.".to_string());
        } else if transfer.amount >= self.config.high_amount {
            score += u16::from(weights.high_amount);
            reasons.push(format!("High amount ({} COP).", transfer.amount));
        } else if transfer.amount <= Decimal::ZERO {
            reasons.push("Invalid amount, assumed 0.".to_string());
        }

        // Rule 2: international
        if transfer.is_international {
            score += u16::from(weights.international);
            reasons.push("International transfer.".to_string());
            recommendations
                .push("Verify destination country against high-risk lists.".to_string());
        }

        // Rule 3: new beneficiary
        if transfer.is_new_beneficiary {
            score += u16::from(weights.new_beneficiary);
            reasons.push("New beneficiary account.".to_string());
            recommendations.push("Recommend a low-amount test transfer.".to_string());
        }

        // Rule 4: unusual hour
        if transfer.is_unusual_hour {
            score += u16::from(weights.unusual_hour);
            reasons.push("Unusual hour for this customer.".to_string());
        }

        // Rule 5: new device
        if transfer.is_new_device {
            score += u16::from(weights.new_device);
            reasons.push("Unrecognized device.".to_string());
            recommendations.push("Request a second authentication factor.".to_string());
        }

        // Rule 6: destination country
        if self.jurisdictions.contains(&transfer.destination_country) {
            score += u16::from(weights.high_risk_country);
            reasons.push(format!(
                "Destination country classified as a high-risk jurisdiction ({}).",
                transfer.destination_country
            ));
        }

        let risk_score = RiskScore::new(score.min(100) as u8);
        let level = RiskLevel::from(risk_score);

        if reasons.is_empty() {
            reasons.push("No relevant risk factors detected.".to_string());
        }
        if recommendations.is_empty() {
            recommendations.push("Allow the transaction with standard monitoring.".to_string());
        }

        if level == RiskLevel::High {
            warn!(
                score = risk_score.score(),
                country = %transfer.destination_country,
                "High risk transfer"
            );
        } else {
            debug!(score = risk_score.score(), level = %level, "Transfer evaluated");
        }

        RiskResult {
            score: risk_score,
            level,
            reasons,
            recommendations,
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), JurisdictionList::default())
    }
}

/// Evaluate a transfer with the default scoring rules
pub fn evaluate(transfer: &Transfer) -> RiskResult {
    RiskScorer::default().evaluate(transfer)
}

//! Property-based tests for scoring invariants
//!
//! These tests use proptest to verify critical invariants:
//! - Score bounds: 0 <= score <= 100 for every input
//! - Non-empty output: reasons and recommendations always present
//! - Determinism: same transfer → same result
//! - Monotonicity: setting a risk flag never lowers the score

use proptest::prelude::*;
use risk_engine::{scoring, JurisdictionList, RiskLevel, RiskScorer, ScoringConfig, Transfer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Strategy for generating amounts, including zero and negative raw input
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..50_000_000i64).prop_map(Decimal::from)
}

/// Strategy for generating country codes, biased toward the high-risk set
fn country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z]{2}",
        Just("RU".to_string()),
        Just("PA".to_string()),
        Just("CO".to_string()),
        Just(String::new()),
    ]
}

/// Strategy for generating channels (free text, unused by scoring)
fn channel_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("mobile app".to_string()),
        Just("web".to_string()),
        Just("ATM".to_string()),
        "[a-z ]{0,12}",
    ]
}

/// Strategy for generating complete transfers
fn transfer_strategy() -> impl Strategy<Value = Transfer> {
    (
        amount_strategy(),
        country_strategy(),
        channel_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                amount,
                destination_country,
                channel,
                is_new_beneficiary,
                is_international,
                is_unusual_hour,
                is_new_device,
            )| Transfer {
                amount,
                destination_country,
                channel,
                is_new_beneficiary,
                is_international,
                is_unusual_hour,
                is_new_device,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: score is always within [0, 100]
    #[test]
    fn prop_score_bounded(transfer in transfer_strategy()) {
        let result = scoring::evaluate(&transfer);
        prop_assert!(result.score.score() <= 100);
    }

    /// Property: reasons and recommendations are never empty
    #[test]
    fn prop_output_never_empty(transfer in transfer_strategy()) {
        let result = scoring::evaluate(&transfer);
        prop_assert!(!result.reasons.is_empty());
        prop_assert!(!result.recommendations.is_empty());
    }

    /// Property: level is consistent with the score
    #[test]
    fn prop_level_matches_score(transfer in transfer_strategy()) {
        let result = scoring::evaluate(&transfer);
        prop_assert_eq!(result.level, RiskLevel::from(result.score));

        match result.level {
            RiskLevel::High => prop_assert!(result.score.score() >= 70),
            RiskLevel::Medium => prop_assert!((40..70).contains(&result.score.score())),
            RiskLevel::Low => prop_assert!(result.score.score() < 40),
        }
    }

    /// Property: evaluation is idempotent
    #[test]
    fn prop_evaluation_idempotent(transfer in transfer_strategy()) {
        let first = scoring::evaluate(&transfer);
        let second = scoring::evaluate(&transfer);
        prop_assert_eq!(first, second);
    }

    /// Property: setting any risk flag never lowers the score
    #[test]
    fn prop_flags_monotonic(transfer in transfer_strategy()) {
        let base = scoring::evaluate(&transfer).score.score();

        let mut with_beneficiary = transfer.clone();
        with_beneficiary.is_new_beneficiary = true;
        prop_assert!(scoring::evaluate(&with_beneficiary).score.score() >= base);

        let mut with_international = transfer.clone();
        with_international.is_international = true;
        prop_assert!(scoring::evaluate(&with_international).score.score() >= base);

        let mut with_hour = transfer.clone();
        with_hour.is_unusual_hour = true;
        prop_assert!(scoring::evaluate(&with_hour).score.score() >= base);

        let mut with_device = transfer.clone();
        with_device.is_new_device = true;
        prop_assert!(scoring::evaluate(&with_device).score.score() >= base);
    }

    /// Property: non-positive amounts are reported as invalid
    #[test]
    fn prop_invalid_amount_reported(raw in -1_000_000i64..=0) {
        let transfer = Transfer {
            amount: Decimal::from(raw),
            destination_country: "CO".to_string(),
            channel: String::new(),
            is_new_beneficiary: false,
            is_international: false,
            is_unusual_hour: false,
            is_new_device: false,
        };

        let result = scoring::evaluate(&transfer);
        prop_assert!(result.reasons.contains(&"Invalid amount, assumed 0.".to_string()));
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_raw_input_end_to_end() {
        // Garbage amount, untrimmed lowercase country, as the front-end sends it
        let transfer = Transfer::from_raw("not a number", " ru ", " web ", false, true, false, false);

        let result = scoring::evaluate(&transfer);

        // 0 (invalid amount) + 25 (international) + 15 (high-risk jurisdiction)
        assert_eq!(result.score.score(), 40);
        assert_eq!(result.level, RiskLevel::Medium);
        assert!(result
            .reasons
            .contains(&"Invalid amount, assumed 0.".to_string()));
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("high-risk jurisdiction (RU)")));
    }

    #[test]
    fn test_custom_jurisdiction_list() {
        let scorer = RiskScorer::new(ScoringConfig::default(), JurisdictionList::new(["IR", "KP"]));

        let transfer = Transfer {
            amount: dec!(1_000_000),
            destination_country: "IR".to_string(),
            channel: String::new(),
            is_new_beneficiary: false,
            is_international: false,
            is_unusual_hour: false,
            is_new_device: false,
        };

        let result = scorer.evaluate(&transfer);
        assert_eq!(result.score.score(), 15);

        // Default set no longer applies
        let mut to_russia = transfer.clone();
        to_russia.destination_country = "RU".to_string();
        assert_eq!(scorer.evaluate(&to_russia).score.score(), 0);
    }
}

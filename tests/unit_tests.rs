// Unit tests for the pure business computations and the error translator

use serde_json::json;
use tradelink_api::client::{translate, ApiError, ErrorContext};
use tradelink_api::core::{fallback_candidates, tier_progress, tier_progress_with};
use tradelink_api::models::VerificationStatus;
use tradelink_api::FallbackDataset;

#[test]
fn test_tier_progress_reference_scenario() {
    let table = [
        ("Bronze", 0.0),
        ("Silver", 5.0),
        ("Gold", 10.0),
        ("Platinum", 25.0),
    ];

    let progress = tier_progress_with(&table, 12.0);
    assert_eq!(progress.current_tier, "Gold");
    assert_eq!(progress.next_tier.as_deref(), Some("Platinum"));
    assert_eq!(progress.progress_to_next_tier_percent, 13);
}

#[test]
fn test_tier_progress_total_over_reals() {
    for score in [-1e6, -0.1, 0.0, 9.99, 10.0, 49.5, 99.9, 100.0, 1e9] {
        let progress = tier_progress(score);
        assert!(!progress.current_tier.is_empty());
        assert!(progress.progress_to_next_tier_percent <= 100);
        if progress.next_tier.is_none() {
            assert_eq!(progress.progress_to_next_tier_percent, 100);
        }
    }
}

#[test]
fn test_tier_progress_monotonic_then_resets() {
    // Within the Gold band [25, 50) progress never decreases
    let mut last = 0;
    for tenths in 250..500 {
        let progress = tier_progress(tenths as f64 / 10.0);
        assert_eq!(progress.current_tier, "Gold");
        assert!(progress.progress_to_next_tier_percent >= last);
        last = progress.progress_to_next_tier_percent;
    }

    // Crossing into Platinum resets to 0
    let crossed = tier_progress(50.0);
    assert_eq!(crossed.current_tier, "Platinum");
    assert_eq!(crossed.progress_to_next_tier_percent, 0);
}

#[test]
fn test_match_fallback_bounds_and_verification() {
    let dataset = FallbackDataset::new();
    let candidates = fallback_candidates(&dataset, "job-irrelevant");

    assert!(candidates.len() <= 3);
    for candidate in &candidates {
        assert_eq!(
            candidate.subject.verification_status,
            VerificationStatus::Verified
        );
        assert!((0.0..=1.0).contains(&candidate.score));
        assert_eq!(candidate.reason, "available verified provider");
    }
}

#[test]
fn test_match_fallback_is_deterministic() {
    let dataset = FallbackDataset::new();
    let first = fallback_candidates(&dataset, "job-1");
    let second = fallback_candidates(&dataset, "job-1");

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.subject.id, b.subject.id);
        assert_eq!(a.score, b.score);
    }
}

#[test]
fn test_translator_not_found_prefers_detail_text() {
    let error = ApiError::from_status(404, json!({"message": "Job no longer listed"}));
    let rendered = translate(&error, ErrorContext::General);

    assert_eq!(rendered.message, "Job no longer listed");
    assert!(!rendered.can_retry);
}

#[test]
fn test_translator_retryability() {
    assert!(translate(&ApiError::network("x"), ErrorContext::General).can_retry);
    assert!(translate(&ApiError::timeout(), ErrorContext::General).can_retry);
    assert!(translate(&ApiError::from_status(500, json!({})), ErrorContext::General).can_retry);
    assert!(translate(&ApiError::unclassified("x"), ErrorContext::General).can_retry);

    assert!(!translate(&ApiError::from_status(401, json!({})), ErrorContext::General).can_retry);
    assert!(!translate(&ApiError::from_status(404, json!({})), ErrorContext::General).can_retry);
}

#[test]
fn test_translator_payment_processor_special_case() {
    let stripe = ApiError::from_status(500, json!({"error": "stripe: card declined upstream"}));
    let rendered = translate(&stripe, ErrorContext::Payment);
    assert_eq!(
        rendered.message,
        "Our payment processor reported a problem. You have not been charged."
    );

    // Non-payment context ignores the processor marker
    let generic = translate(&stripe, ErrorContext::General);
    assert_eq!(generic.message, "stripe: card declined upstream");
}

#[test]
fn test_translator_context_overrides_fall_through_for_other_codes() {
    let not_found = ApiError::from_status(404, json!({}));
    let general = translate(&not_found, ErrorContext::General);
    let profile = translate(&not_found, ErrorContext::ProfileSave);
    assert_eq!(general, profile);
}

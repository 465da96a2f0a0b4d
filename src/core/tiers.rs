use crate::models::TierProgress;

/// Default tier thresholds; ascending, closed lower bounds
pub const DEFAULT_TIERS: [(&str, f64); 5] = [
    ("Bronze", 0.0),
    ("Silver", 10.0),
    ("Gold", 25.0),
    ("Platinum", 50.0),
    ("Diamond", 100.0),
];

/// Map a performance score to its tier and progress toward the next one
///
/// Total over the reals: scores below the first threshold clamp into the
/// first tier at 0%, scores at or above the maximal threshold pin to the top
/// tier with `next_tier = None` and 100%.
pub fn tier_progress(score: f64) -> TierProgress {
    tier_progress_with(&DEFAULT_TIERS, score)
}

/// Same as [`tier_progress`] over a caller-supplied threshold table
pub fn tier_progress_with(tiers: &[(&str, f64)], score: f64) -> TierProgress {
    debug_assert!(!tiers.is_empty());

    // Closed lower bound: an exactly-at-threshold score belongs to that tier.
    let mut current = 0;
    for (index, (_, threshold)) in tiers.iter().enumerate() {
        if score >= *threshold {
            current = index;
        }
    }

    let (current_name, current_threshold) = tiers[current];
    match tiers.get(current + 1) {
        None => TierProgress {
            current_tier: current_name.to_string(),
            next_tier: None,
            progress_to_next_tier_percent: 100,
        },
        Some((next_name, next_threshold)) => {
            let span = next_threshold - current_threshold;
            let fraction = if span > 0.0 {
                (score - current_threshold) / span
            } else {
                0.0
            };
            let percent = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;

            TierProgress {
                current_tier: current_name.to_string(),
                next_tier: Some(next_name.to_string()),
                progress_to_next_tier_percent: percent,
            }
        }
    }
}

// Pure business computation exports
pub mod matching;
pub mod tiers;

pub use matching::{fallback_candidates, FALLBACK_SCORE, MAX_FALLBACK_CANDIDATES};
pub use tiers::{tier_progress, tier_progress_with, DEFAULT_TIERS};

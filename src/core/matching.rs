use crate::fallback::FallbackDataset;
use crate::models::MatchCandidate;

/// Upper bound on candidates produced by the fallback heuristic
pub const MAX_FALLBACK_CANDIDATES: usize = 3;

/// Fixed score assigned to every fallback candidate
pub const FALLBACK_SCORE: f64 = 0.7;

const FALLBACK_REASON: &str = "available verified provider";

/// Conservative substitute ranking when the remote matcher is unreachable
///
/// Selects verified providers in dataset order, at most three, each with a
/// fixed 0.7 score. This is a placeholder, not the server-side ranking
/// algorithm; the job id is context for logging only.
pub fn fallback_candidates(dataset: &FallbackDataset, job_id: &str) -> Vec<MatchCandidate> {
    tracing::debug!(job_id, "ranking substitute match candidates");

    dataset
        .verified_providers()
        .into_iter()
        .take(MAX_FALLBACK_CANDIDATES)
        .map(|subject| MatchCandidate {
            subject,
            score: FALLBACK_SCORE,
            reason: FALLBACK_REASON.to_string(),
        })
        .collect()
}

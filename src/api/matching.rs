use crate::api::{MarketplaceApi, Sourced};
use crate::core::matching::fallback_candidates;
use crate::models::{InviteProviderRequest, InviteReceipt, MatchCandidate};
use tracing::warn;

/// Writes allowed to return a simulated success instead of propagating
///
/// Faking a write masks backend unavailability from the caller, so additions
/// here require review. Invites are low-stakes: the backend re-delivers
/// queued invites and nothing financial depends on them.
pub const SIMULATED_SUCCESS_WRITES: &[&str] = &["invite_provider"];

impl MarketplaceApi {
    /// Ranked provider candidates for a job
    ///
    /// On remote failure the local heuristic substitutes a conservative list;
    /// the result shape does not reveal which ranking produced it.
    pub async fn match_providers(&self, job_id: &str) -> Sourced<Vec<MatchCandidate>> {
        let path = format!("/matching/jobs/{}/candidates", job_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(candidates) => Sourced::Live(candidates),
            Err(err) => {
                warn!(job_id, error = %err, "remote matcher unavailable, using substitute ranking");
                Sourced::Fallback(fallback_candidates(&self.fallback, job_id))
            }
        }
    }

    /// Invite a provider to a job
    ///
    /// This write is on [`SIMULATED_SUCCESS_WRITES`]: when the backend is
    /// unreachable it returns a simulated receipt tagged as
    /// [`Sourced::Fallback`] rather than an error. Callers that need hard
    /// delivery guarantees must check the tag.
    pub async fn invite_provider(
        &self,
        job_id: &str,
        request: &InviteProviderRequest,
    ) -> Sourced<InviteReceipt> {
        let path = format!("/jobs/{}/invites", job_id);
        match self.retry.run(|| self.transport.post(&path, request)).await {
            Ok(receipt) => Sourced::Live(receipt),
            Err(err) => {
                warn!(
                    job_id,
                    provider_id = %request.provider_id,
                    error = %err,
                    "invite endpoint unavailable, returning simulated receipt"
                );
                Sourced::Fallback(
                    self.fallback
                        .simulated_invite_receipt(job_id, &request.provider_id),
                )
            }
        }
    }
}

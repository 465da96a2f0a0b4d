use crate::api::{MarketplaceApi, Sourced};
use crate::client::ApiError;
use crate::models::{
    Bid, CreateJobRequest, Job, PlaceBidRequest, Proposal, SubmitProposalRequest,
};
use serde_json::json;
use tracing::warn;

impl MarketplaceApi {
    /// List all jobs
    pub async fn list_jobs(&self) -> Sourced<Vec<Job>> {
        match self.retry.run(|| self.transport.get("/jobs")).await {
            Ok(jobs) => Sourced::Live(jobs),
            Err(error) => {
                warn!(%error, "job list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.jobs())
            }
        }
    }

    /// Jobs posted by a client
    pub async fn jobs_for_client(&self, client_id: &str) -> Sourced<Vec<Job>> {
        let query = [("clientId", client_id)];
        match self
            .retry
            .run(|| self.transport.get_with_query("/jobs", &query))
            .await
        {
            Ok(jobs) => Sourced::Live(jobs),
            Err(error) => {
                warn!(client_id, %error, "client job list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.jobs_for_client(client_id))
            }
        }
    }

    /// Jobs assigned to a provider; filters on the provider id field, not the
    /// client id field, matching the live backend's filter semantics
    pub async fn jobs_for_provider(&self, provider_id: &str) -> Sourced<Vec<Job>> {
        let query = [("providerId", provider_id)];
        match self
            .retry
            .run(|| self.transport.get_with_query("/jobs", &query))
            .await
        {
            Ok(jobs) => Sourced::Live(jobs),
            Err(error) => {
                warn!(provider_id, %error, "provider job list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.jobs_for_provider(provider_id))
            }
        }
    }

    /// Proposals submitted against a job
    pub async fn proposals_for_job(&self, job_id: &str) -> Sourced<Vec<Proposal>> {
        let path = format!("/jobs/{}/proposals", job_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(proposals) => Sourced::Live(proposals),
            Err(error) => {
                warn!(job_id, %error, "proposal list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.proposals_for_job(job_id))
            }
        }
    }

    /// Auction bids placed on a job
    pub async fn bids_for_job(&self, job_id: &str) -> Sourced<Vec<Bid>> {
        let path = format!("/jobs/{}/bids", job_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(bids) => Sourced::Live(bids),
            Err(error) => {
                warn!(job_id, %error, "bid list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.bids_for_job(job_id))
            }
        }
    }

    /// Post a new job
    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Job, ApiError> {
        self.retry
            .run(|| self.transport.post("/jobs", request))
            .await
    }

    /// Submit a priced proposal against a job
    pub async fn submit_proposal(
        &self,
        job_id: &str,
        request: &SubmitProposalRequest,
    ) -> Result<Proposal, ApiError> {
        let path = format!("/jobs/{}/proposals", job_id);
        self.retry.run(|| self.transport.post(&path, request)).await
    }

    /// Accept a proposal; assignment and escrow setup happen server-side
    pub async fn accept_proposal(&self, proposal_id: &str) -> Result<Proposal, ApiError> {
        let path = format!("/proposals/{}/accept", proposal_id);
        let body = json!({});
        self.retry.run(|| self.transport.post(&path, &body)).await
    }

    /// Place an auction bid on a job
    pub async fn place_bid(
        &self,
        job_id: &str,
        request: &PlaceBidRequest,
    ) -> Result<Bid, ApiError> {
        let path = format!("/jobs/{}/bids", job_id);
        self.retry.run(|| self.transport.post(&path, request)).await
    }
}

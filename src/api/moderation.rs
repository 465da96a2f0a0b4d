use crate::api::{MarketplaceApi, Sourced};
use crate::client::ApiError;
use crate::models::{Dispute, ModerationAlert, ResolveDisputeRequest};
use tracing::{error, warn};

impl MarketplaceApi {
    /// Open and resolved disputes
    pub async fn disputes(&self) -> Sourced<Vec<Dispute>> {
        match self.retry.run(|| self.transport.get("/disputes")).await {
            Ok(disputes) => Sourced::Live(disputes),
            Err(err) => {
                warn!(error = %err, "dispute list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.disputes())
            }
        }
    }

    /// Fraud and sentiment alerts raised by backend moderation
    pub async fn moderation_alerts(&self) -> Sourced<Vec<ModerationAlert>> {
        match self
            .retry
            .run(|| self.transport.get("/moderation/alerts"))
            .await
        {
            Ok(alerts) => Sourced::Live(alerts),
            Err(err) => {
                warn!(error = %err, "alert list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.alerts())
            }
        }
    }

    /// Record a dispute resolution; mediation outcome is applied server-side
    pub async fn resolve_dispute(
        &self,
        dispute_id: &str,
        request: &ResolveDisputeRequest,
    ) -> Result<Dispute, ApiError> {
        let path = format!("/disputes/{}/resolve", dispute_id);
        self.retry
            .run(|| self.transport.post(&path, request))
            .await
            .map_err(|err| {
                error!(dispute_id, error = %err, "dispute resolution failed");
                err
            })
    }
}

use crate::api::{MarketplaceApi, Sourced};
use crate::client::ApiError;
use crate::models::{CheckoutSession, CreateCheckoutRequest, EscrowAccount, PaymentReceipt};
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

impl MarketplaceApi {
    /// Escrow state for a job
    pub async fn escrow_for_job(&self, job_id: &str) -> Sourced<Option<EscrowAccount>> {
        let path = format!("/jobs/{}/escrow", job_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(escrow) => Sourced::Live(Some(escrow)),
            Err(err) => {
                warn!(job_id, error = %err, "escrow state unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.escrow_for_job(job_id))
            }
        }
    }

    /// Open a payment checkout session
    ///
    /// An idempotency key is generated once per logical call and shared by
    /// retry attempts, so a retried create cannot open two sessions on a
    /// deduplicating backend.
    pub async fn create_checkout_session(
        &self,
        request: &CreateCheckoutRequest,
    ) -> Result<CheckoutSession, ApiError> {
        let payload = json!({
            "jobId": request.job_id,
            "amount": request.amount,
            "idempotencyKey": Uuid::new_v4().to_string(),
        });

        self.retry
            .run(|| self.transport.post("/payments/checkout", &payload))
            .await
            .map_err(|err| {
                error!(job_id = %request.job_id, error = %err, "checkout session creation failed");
                err
            })
    }

    /// Confirm a completed checkout session
    pub async fn confirm_payment(&self, session_id: &str) -> Result<PaymentReceipt, ApiError> {
        let path = format!("/payments/{}/confirm", session_id);
        let body = json!({});
        self.retry.run(|| self.transport.post(&path, &body)).await
    }

    /// Release escrowed funds for a completed job
    pub async fn release_payment(&self, job_id: &str) -> Result<PaymentReceipt, ApiError> {
        let path = format!("/jobs/{}/escrow/release", job_id);
        let body = json!({});
        self.retry
            .run(|| self.transport.post(&path, &body))
            .await
            .map_err(|err| {
                error!(job_id, error = %err, "escrow release failed");
                err
            })
    }
}

use serde::{Deserialize, Serialize};

/// A payment checkout session created by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    /// Redirect URL for the hosted payment page
    pub url: String,
    pub amount: f64,
    pub status: String,
}

/// Receipt for a confirmed or released payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub amount: f64,
    pub status: String,
}

/// Receipt for a provider invite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteReceipt {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub status: String,
}

/// Generic acknowledgement for small state-flip writes (e.g. mark-read)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteAck {
    pub success: bool,
    pub id: String,
}

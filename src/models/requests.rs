use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to post a new job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub budget: f64,
}

/// Request to submit a priced proposal against a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitProposalRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request to place an auction bid on a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceBidRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

/// Request to send a direct message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
    #[validate(length(min = 1))]
    pub body: String,
}

/// Partial profile update; unset fields are left unchanged server-side
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Request to record a dispute resolution
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveDisputeRequest {
    #[validate(length(min = 1))]
    pub resolution: String,
}

/// Request to open a payment checkout session for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCheckoutRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

/// Request to invite a provider to a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteProviderRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(default)]
    pub note: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Marketplace account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Client,
    Provider,
}

/// Provider identity-check state; gates marketplace participation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// A marketplace user (service requester or service provider)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
    #[serde(rename = "verificationStatus", default = "default_verification")]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "completedJobs", default)]
    pub completed_jobs: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "tierScore", default)]
    pub tier_score: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_verification() -> VerificationStatus {
    VerificationStatus::Pending
}

impl UserAccount {
    /// Helper to check whether this account is a verified provider
    pub fn is_verified_provider(&self) -> bool {
        self.account_type == AccountType::Provider
            && self.verification_status == VerificationStatus::Verified
    }
}

/// Compact provider view used in match results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "verificationStatus")]
    pub verification_status: VerificationStatus,
}

impl From<&UserAccount> for ProviderSummary {
    fn from(user: &UserAccount) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            rating: user.rating,
            skills: user.skills.clone(),
            verification_status: user.verification_status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Assigned,
    InProgress,
    Completed,
    Disputed,
    Cancelled,
}

/// A posted service job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "providerId", default)]
    pub provider_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub budget: f64,
    pub status: JobStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Declined,
}

/// A provider's priced offer against a posted job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub price: f64,
    #[serde(default)]
    pub message: Option<String>,
    pub status: ProposalStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An open auction bid on a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub amount: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Direct message between two marketplace users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "sentAt", default)]
    pub sent_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An appliance or installation a client keeps under maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintainedItem {
    pub id: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "lastServicedAt", default)]
    pub last_serviced_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
}

/// A contested job outcome awaiting mediation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispute {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "raisedBy")]
    pub raised_by: String,
    pub reason: String,
    pub status: DisputeStatus,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Fraud,
    Sentiment,
}

/// Fraud or sentiment signal raised against a user by backend moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationAlert {
    pub id: String,
    pub kind: AlertKind,
    #[serde(rename = "subjectUserId")]
    pub subject_user_id: String,
    pub detail: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscrowStatus {
    Held,
    Released,
    Refunded,
}

/// Backend-held funds for a job (server-side concept; read-only here)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowAccount {
    pub id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub amount: f64,
    pub status: EscrowStatus,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A ranked provider candidate for a job
///
/// Produced either by the remote matching service or by the local fallback
/// heuristic; callers must not assume provenance from the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub subject: ProviderSummary,
    /// Score in [0, 1]
    pub score: f64,
    pub reason: String,
}

/// A provider's reputation band and progress toward the next one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    #[serde(rename = "currentTier")]
    pub current_tier: String,
    /// `None` only at the maximal tier
    #[serde(rename = "nextTier")]
    pub next_tier: Option<String>,
    #[serde(rename = "progressToNextTierPercent")]
    pub progress_to_next_tier_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_provider_helper() {
        let user = UserAccount {
            id: "u1".to_string(),
            email: "p@x.com".to_string(),
            name: "Provider".to_string(),
            account_type: AccountType::Provider,
            verification_status: VerificationStatus::Verified,
            rating: 4.5,
            completed_jobs: 10,
            skills: vec!["plumbing".to_string()],
            tier_score: 30.0,
            created_at: None,
        };

        assert!(user.is_verified_provider());

        let mut pending = user.clone();
        pending.verification_status = VerificationStatus::Pending;
        assert!(!pending.is_verified_provider());

        let mut client = user;
        client.account_type = AccountType::Client;
        assert!(!client.is_verified_provider());
    }

    #[test]
    fn test_user_deserializes_with_wire_names() {
        let json = r#"{
            "id": "u2",
            "email": "a@x.com",
            "name": "Ava",
            "accountType": "client",
            "verificationStatus": "verified",
            "completedJobs": 3
        }"#;

        let user: UserAccount = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.account_type, AccountType::Client);
        assert_eq!(user.completed_jobs, 3);
        assert_eq!(user.rating, 0.0);
    }
}

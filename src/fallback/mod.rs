//! Static substitute dataset served when the backend is unreachable.
//!
//! The dataset is built once and never mutates; accessors hand out owned
//! clones and use the same join keys the live backend uses, so degraded
//! results stay behaviorally interchangeable with live ones.

mod seed;

use crate::models::{
    Bid, Dispute, EscrowAccount, InviteReceipt, Job, MaintainedItem, Message, ModerationAlert,
    Notification, Proposal, ProviderSummary, UserAccount,
};

/// Immutable, internally-referential collection of synthetic entities
#[derive(Debug, Clone)]
pub struct FallbackDataset {
    pub(crate) users: Vec<UserAccount>,
    pub(crate) jobs: Vec<Job>,
    pub(crate) proposals: Vec<Proposal>,
    pub(crate) bids: Vec<Bid>,
    pub(crate) messages: Vec<Message>,
    pub(crate) items: Vec<MaintainedItem>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) disputes: Vec<Dispute>,
    pub(crate) alerts: Vec<ModerationAlert>,
    pub(crate) escrow_accounts: Vec<EscrowAccount>,
}

impl FallbackDataset {
    pub fn new() -> Self {
        seed::build()
    }

    pub fn users(&self) -> Vec<UserAccount> {
        self.users.clone()
    }

    pub fn user_by_id(&self, id: &str) -> Option<UserAccount> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    /// Jobs posted by a client; joins on the client id field
    pub fn jobs_for_client(&self, client_id: &str) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|j| j.client_id == client_id)
            .cloned()
            .collect()
    }

    /// Jobs assigned to a provider; joins on the provider id field, not the
    /// client id field
    pub fn jobs_for_provider(&self, provider_id: &str) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|j| j.provider_id.as_deref() == Some(provider_id))
            .cloned()
            .collect()
    }

    pub fn proposals_for_job(&self, job_id: &str) -> Vec<Proposal> {
        self.proposals
            .iter()
            .filter(|p| p.job_id == job_id)
            .cloned()
            .collect()
    }

    pub fn bids_for_job(&self, job_id: &str) -> Vec<Bid> {
        self.bids
            .iter()
            .filter(|b| b.job_id == job_id)
            .cloned()
            .collect()
    }

    /// Messages where the user is sender or recipient
    pub fn messages_for_user(&self, user_id: &str) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.sender_id == user_id || m.recipient_id == user_id)
            .cloned()
            .collect()
    }

    pub fn items_for_owner(&self, owner_id: &str) -> Vec<MaintainedItem> {
        self.items
            .iter()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn notifications_for(&self, user_id: &str) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn disputes(&self) -> Vec<Dispute> {
        self.disputes.clone()
    }

    pub fn alerts(&self) -> Vec<ModerationAlert> {
        self.alerts.clone()
    }

    pub fn escrow_for_job(&self, job_id: &str) -> Option<EscrowAccount> {
        self.escrow_accounts
            .iter()
            .find(|e| e.job_id == job_id)
            .cloned()
    }

    /// Verified providers in dataset order
    pub fn verified_providers(&self) -> Vec<ProviderSummary> {
        self.users
            .iter()
            .filter(|u| u.is_verified_provider())
            .map(ProviderSummary::from)
            .collect()
    }

    /// Fixed success shape for the allowlisted invite fallback
    ///
    /// Does not mutate the snapshot; the receipt id is deterministic so
    /// repeated degraded calls stay identical.
    pub fn simulated_invite_receipt(&self, job_id: &str, provider_id: &str) -> InviteReceipt {
        InviteReceipt {
            id: format!("invite-offline-{}-{}", job_id, provider_id),
            job_id: job_id.to_string(),
            provider_id: provider_id.to_string(),
            status: "queued".to_string(),
        }
    }
}

impl Default for FallbackDataset {
    fn default() -> Self {
        Self::new()
    }
}

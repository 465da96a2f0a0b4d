// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AccountType, AlertKind, Bid, Dispute, DisputeStatus, EscrowAccount, EscrowStatus, Job,
    JobStatus, MaintainedItem, MatchCandidate, Message, ModerationAlert, Notification,
    Proposal, ProposalStatus, ProviderSummary, TierProgress, UserAccount, VerificationStatus,
};
pub use requests::{
    CreateCheckoutRequest, CreateJobRequest, InviteProviderRequest, PlaceBidRequest,
    ResolveDisputeRequest, SendMessageRequest, SubmitProposalRequest, UpdateProfileRequest,
};
pub use responses::{CheckoutSession, InviteReceipt, PaymentReceipt, WriteAck};

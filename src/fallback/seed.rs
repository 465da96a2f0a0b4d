use crate::fallback::FallbackDataset;
use crate::models::{
    AccountType, AlertKind, Bid, Dispute, DisputeStatus, EscrowAccount, EscrowStatus, Job,
    JobStatus, MaintainedItem, Message, ModerationAlert, Notification, Proposal, ProposalStatus,
    UserAccount, VerificationStatus,
};
use chrono::{DateTime, TimeZone, Utc};

fn ts(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single()
}

fn client(id: &str, email: &str, name: &str, tier_score: f64) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        account_type: AccountType::Client,
        verification_status: VerificationStatus::Verified,
        rating: 0.0,
        completed_jobs: 0,
        skills: vec![],
        tier_score,
        created_at: ts(2024, 9, 2, 10),
    }
}

#[allow(clippy::too_many_arguments)]
fn provider(
    id: &str,
    email: &str,
    name: &str,
    status: VerificationStatus,
    rating: f64,
    completed_jobs: u32,
    skills: &[&str],
    tier_score: f64,
) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        account_type: AccountType::Provider,
        verification_status: status,
        rating,
        completed_jobs,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        tier_score,
        created_at: ts(2024, 8, 19, 14),
    }
}

/// Build the static substitute dataset
///
/// Every foreign key here resolves to another entity in the same dataset, so
/// filtered fallback results are structurally indistinguishable from live
/// query results.
pub(super) fn build() -> FallbackDataset {
    let users = vec![
        client("user-client-1", "ava@tradelink.test", "Ava Thompson", 8.0),
        client("user-client-2", "noah@tradelink.test", "Noah Patel", 14.0),
        provider(
            "user-provider-1",
            "maya@tradelink.test",
            "Maya Chen",
            VerificationStatus::Verified,
            4.8,
            42,
            &["plumbing", "heating"],
            62.0,
        ),
        provider(
            "user-provider-2",
            "liam@tradelink.test",
            "Liam Ortiz",
            VerificationStatus::Verified,
            4.5,
            27,
            &["electrical"],
            38.0,
        ),
        provider(
            "user-provider-3",
            "sofia@tradelink.test",
            "Sofia Ricci",
            VerificationStatus::Verified,
            4.2,
            13,
            &["carpentry", "painting"],
            21.0,
        ),
        provider(
            "user-provider-4",
            "ethan@tradelink.test",
            "Ethan Walsh",
            VerificationStatus::Pending,
            0.0,
            0,
            &["gardening"],
            0.0,
        ),
    ];

    let jobs = vec![
        Job {
            id: "job-1".to_string(),
            client_id: "user-client-1".to_string(),
            provider_id: Some("user-provider-1".to_string()),
            title: "Fix leaking kitchen tap".to_string(),
            description: Some("Steady drip under the sink, likely worn washer.".to_string()),
            category: "plumbing".to_string(),
            budget: 120.0,
            status: JobStatus::InProgress,
            created_at: ts(2024, 11, 4, 9),
        },
        Job {
            id: "job-2".to_string(),
            client_id: "user-client-1".to_string(),
            provider_id: None,
            title: "Rewire garage lighting".to_string(),
            description: Some("Two fittings plus a new switch by the door.".to_string()),
            category: "electrical".to_string(),
            budget: 300.0,
            status: JobStatus::Open,
            created_at: ts(2024, 11, 6, 16),
        },
        Job {
            id: "job-3".to_string(),
            client_id: "user-client-2".to_string(),
            provider_id: Some("user-provider-3".to_string()),
            title: "Mount wall shelves".to_string(),
            description: None,
            category: "carpentry".to_string(),
            budget: 90.0,
            status: JobStatus::Completed,
            created_at: ts(2024, 10, 22, 11),
        },
        Job {
            id: "job-4".to_string(),
            client_id: "user-client-2".to_string(),
            provider_id: Some("user-provider-2".to_string()),
            title: "Replace fuse board".to_string(),
            description: Some("Old board trips whenever the oven runs.".to_string()),
            category: "electrical".to_string(),
            budget: 450.0,
            status: JobStatus::Disputed,
            created_at: ts(2024, 10, 28, 8),
        },
    ];

    let proposals = vec![
        Proposal {
            id: "proposal-1".to_string(),
            job_id: "job-2".to_string(),
            provider_id: "user-provider-2".to_string(),
            price: 280.0,
            message: Some("Can start Thursday, parts included.".to_string()),
            status: ProposalStatus::Pending,
            created_at: ts(2024, 11, 7, 9),
        },
        Proposal {
            id: "proposal-2".to_string(),
            job_id: "job-2".to_string(),
            provider_id: "user-provider-3".to_string(),
            price: 265.0,
            message: None,
            status: ProposalStatus::Pending,
            created_at: ts(2024, 11, 7, 12),
        },
        Proposal {
            id: "proposal-3".to_string(),
            job_id: "job-1".to_string(),
            provider_id: "user-provider-1".to_string(),
            price: 110.0,
            message: Some("Have the washer in stock.".to_string()),
            status: ProposalStatus::Accepted,
            created_at: ts(2024, 11, 4, 13),
        },
    ];

    let bids = vec![
        Bid {
            id: "bid-1".to_string(),
            job_id: "job-2".to_string(),
            provider_id: "user-provider-2".to_string(),
            amount: 280.0,
            created_at: ts(2024, 11, 7, 9),
        },
        Bid {
            id: "bid-2".to_string(),
            job_id: "job-2".to_string(),
            provider_id: "user-provider-3".to_string(),
            amount: 265.0,
            created_at: ts(2024, 11, 7, 12),
        },
    ];

    let messages = vec![
        Message {
            id: "msg-1".to_string(),
            sender_id: "user-client-1".to_string(),
            recipient_id: "user-provider-1".to_string(),
            body: "Is Tuesday morning still fine?".to_string(),
            read: true,
            sent_at: ts(2024, 11, 5, 8),
        },
        Message {
            id: "msg-2".to_string(),
            sender_id: "user-provider-1".to_string(),
            recipient_id: "user-client-1".to_string(),
            body: "Yes, I'll be there by nine.".to_string(),
            read: false,
            sent_at: ts(2024, 11, 5, 9),
        },
        Message {
            id: "msg-3".to_string(),
            sender_id: "user-client-2".to_string(),
            recipient_id: "user-provider-2".to_string(),
            body: "The board tripped again overnight.".to_string(),
            read: false,
            sent_at: ts(2024, 10, 29, 7),
        },
    ];

    let items = vec![
        MaintainedItem {
            id: "item-1".to_string(),
            owner_id: "user-client-1".to_string(),
            name: "Gas boiler".to_string(),
            category: "heating".to_string(),
            last_serviced_at: ts(2024, 3, 14, 10),
            notes: Some("Annual service due in March.".to_string()),
        },
        MaintainedItem {
            id: "item-2".to_string(),
            owner_id: "user-client-1".to_string(),
            name: "Dishwasher".to_string(),
            category: "appliance".to_string(),
            last_serviced_at: None,
            notes: None,
        },
        MaintainedItem {
            id: "item-3".to_string(),
            owner_id: "user-client-2".to_string(),
            name: "Air conditioner".to_string(),
            category: "cooling".to_string(),
            last_serviced_at: ts(2024, 6, 2, 15),
            notes: None,
        },
    ];

    let notifications = vec![
        Notification {
            id: "notif-1".to_string(),
            user_id: "user-client-1".to_string(),
            title: "New proposal".to_string(),
            body: "Liam Ortiz sent a proposal for Rewire garage lighting.".to_string(),
            read: false,
            created_at: ts(2024, 11, 7, 9),
        },
        Notification {
            id: "notif-2".to_string(),
            user_id: "user-provider-1".to_string(),
            title: "Job update".to_string(),
            body: "Fix leaking kitchen tap moved to in progress.".to_string(),
            read: true,
            created_at: ts(2024, 11, 4, 14),
        },
    ];

    let disputes = vec![Dispute {
        id: "dispute-1".to_string(),
        job_id: "job-4".to_string(),
        raised_by: "user-client-2".to_string(),
        reason: "Work left incomplete after the agreed date.".to_string(),
        status: DisputeStatus::Open,
        resolution: None,
        created_at: ts(2024, 11, 1, 10),
    }];

    let alerts = vec![
        ModerationAlert {
            id: "alert-1".to_string(),
            kind: AlertKind::Fraud,
            subject_user_id: "user-provider-4".to_string(),
            detail: "Payment method flagged by risk checks.".to_string(),
            created_at: ts(2024, 11, 3, 18),
        },
        ModerationAlert {
            id: "alert-2".to_string(),
            kind: AlertKind::Sentiment,
            subject_user_id: "user-client-2".to_string(),
            detail: "Sharp negative turn in recent messages.".to_string(),
            created_at: ts(2024, 11, 2, 20),
        },
    ];

    let escrow_accounts = vec![
        EscrowAccount {
            id: "escrow-1".to_string(),
            job_id: "job-1".to_string(),
            amount: 120.0,
            status: EscrowStatus::Held,
            updated_at: ts(2024, 11, 4, 13),
        },
        EscrowAccount {
            id: "escrow-2".to_string(),
            job_id: "job-3".to_string(),
            amount: 90.0,
            status: EscrowStatus::Released,
            updated_at: ts(2024, 10, 25, 9),
        },
    ];

    FallbackDataset {
        users,
        jobs,
        proposals,
        bids,
        messages,
        items,
        notifications,
        disputes,
        alerts,
        escrow_accounts,
    }
}

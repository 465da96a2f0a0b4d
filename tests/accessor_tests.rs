// Read-path degradation and write-path propagation tests

use std::sync::Arc;
use std::time::Duration;
use tradelink_api::client::{ErrorCode, HttpTransport, RetryPolicy};
use tradelink_api::config::BackendSettings;
use tradelink_api::models::{
    CreateCheckoutRequest, CreateJobRequest, InviteProviderRequest, SendMessageRequest,
    VerificationStatus,
};
use tradelink_api::{FallbackDataset, MarketplaceApi};

fn api_for(base_url: &str) -> MarketplaceApi {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let settings = BackendSettings {
        base_url: base_url.to_string(),
        timeout_secs: Some(2),
        bearer_token: None,
    };
    MarketplaceApi::new(
        Arc::new(HttpTransport::new(&settings).unwrap()),
        RetryPolicy::new(2, Duration::from_millis(5)),
        Arc::new(FallbackDataset::new()),
    )
}

#[tokio::test]
async fn test_job_list_degrades_to_fallback_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/jobs")
        .with_status(500)
        .with_body(r#"{"error": "boom"}"#)
        .create_async()
        .await;

    let api = api_for(&server.url());
    let jobs = api.list_jobs().await;

    assert!(jobs.is_fallback());
    let jobs = jobs.into_inner();
    assert!(!jobs.is_empty());
    // Same shape as live jobs: ids and client references populated
    for job in &jobs {
        assert!(!job.id.is_empty());
        assert!(!job.client_id.is_empty());
    }
}

#[tokio::test]
async fn test_user_list_recovers_on_next_successful_call() {
    let mut server = mockito::Server::new_async().await;

    // First call: backend down, reads degrade but never error
    let api = api_for(&server.url());
    let degraded = api.list_users().await;
    assert!(degraded.is_fallback());
    assert!(!degraded.as_inner().is_empty());

    // Second call: backend is back and the live payload wins
    let _mock = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(
            r#"[{"id": "u-9", "email": "a@x.com", "name": "Live User", "accountType": "client"}]"#,
        )
        .create_async()
        .await;

    let live = api.list_users().await;
    assert!(live.is_live());
    let users = live.into_inner();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
}

#[tokio::test]
async fn test_provider_job_filter_uses_provider_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/jobs")
        .match_query(mockito::Matcher::UrlEncoded(
            "providerId".into(),
            "user-provider-1".into(),
        ))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let jobs = api.jobs_for_provider("user-provider-1").await;

    assert!(jobs.is_live());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_provider_job_fallback_matches_provider_field() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(503)
        .with_body("{}")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let jobs = api.jobs_for_provider("user-provider-1").await;

    assert!(jobs.is_fallback());
    for job in jobs.as_inner() {
        assert_eq!(job.provider_id.as_deref(), Some("user-provider-1"));
    }
}

#[tokio::test]
async fn test_write_propagates_auth_error_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/jobs")
        .with_status(403)
        .with_body(r#"{"error": "account suspended"}"#)
        .expect(1)
        .create_async()
        .await;

    let api = api_for(&server.url());
    let request = CreateJobRequest {
        client_id: "user-client-1".to_string(),
        title: "Fix tap".to_string(),
        description: None,
        category: "plumbing".to_string(),
        budget: 100.0,
    };
    let error = api.create_job(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::Auth);
    assert_eq!(error.status, Some(403));
    assert_eq!(error.message, "account suspended");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_write_retries_server_errors_then_propagates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .with_status(500)
        .with_body(r#"{"error": "queue full"}"#)
        .expect(3)
        .create_async()
        .await;

    let api = api_for(&server.url());
    let request = SendMessageRequest {
        sender_id: "user-client-1".to_string(),
        recipient_id: "user-provider-1".to_string(),
        body: "hello".to_string(),
    };
    let error = api.send_message(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::Server);
    assert_eq!(error.status, Some(500));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_checkout_rejects_with_timeout_when_backend_stalls() {
    // Accept the connection but never answer
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let _conn = listener.accept().await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let settings = BackendSettings {
        base_url: format!("http://{}", addr),
        timeout_secs: Some(1),
        bearer_token: None,
    };
    let api = MarketplaceApi::new(
        Arc::new(HttpTransport::new(&settings).unwrap()),
        RetryPolicy::new(0, Duration::from_millis(1)),
        Arc::new(FallbackDataset::new()),
    );

    let request = CreateCheckoutRequest {
        job_id: "job-1".to_string(),
        amount: 120.0,
    };
    let error = api.create_checkout_session(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::Timeout);
    hold.abort();
}

#[tokio::test]
async fn test_matching_substitutes_heuristic_when_remote_down() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(500)
        .with_body("{}")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let candidates = api.match_providers("job-2").await;

    assert!(candidates.is_fallback());
    let candidates = candidates.into_inner();
    assert!(!candidates.is_empty());
    assert!(candidates.len() <= 3);
    for candidate in &candidates {
        assert_eq!(
            candidate.subject.verification_status,
            VerificationStatus::Verified
        );
        assert_eq!(candidate.score, 0.7);
    }
}

#[tokio::test]
async fn test_invite_returns_simulated_receipt_when_backend_down() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", mockito::Matcher::Any)
        .with_status(503)
        .with_body("{}")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let request = InviteProviderRequest {
        provider_id: "user-provider-2".to_string(),
        note: None,
    };
    let receipt = api.invite_provider("job-2", &request).await;

    // The degradation is visible in the tag, not hidden
    assert!(receipt.is_fallback());
    let receipt = receipt.into_inner();
    assert_eq!(receipt.job_id, "job-2");
    assert_eq!(receipt.provider_id, "user-provider-2");
    assert_eq!(receipt.status, "queued");
}

#[tokio::test]
async fn test_escrow_read_degrades_to_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(500)
        .with_body("{}")
        .create_async()
        .await;

    let api = api_for(&server.url());

    let held = api.escrow_for_job("job-1").await;
    assert!(held.is_fallback());
    assert!(held.as_inner().is_some());

    let missing = api.escrow_for_job("job-2").await;
    assert!(missing.is_fallback());
    assert!(missing.as_inner().is_none());
}

#[tokio::test]
async fn test_independent_reads_are_isolated() {
    let mut server = mockito::Server::new_async().await;
    let _jobs_down = server
        .mock("GET", "/jobs")
        .with_status(500)
        .with_body("{}")
        .create_async()
        .await;
    let _users_up = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let api = api_for(&server.url());
    let (jobs, users) = tokio::join!(api.list_jobs(), api.list_users());

    // One sibling failing must not affect the other's outcome
    assert!(jobs.is_fallback());
    assert!(users.is_live());
}

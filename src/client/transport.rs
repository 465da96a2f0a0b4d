use crate::client::error::ApiError;
use crate::config::BackendSettings;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::RwLock;
use std::time::Duration;

/// Default per-request deadline; the in-flight request is cancelled when it
/// elapses and the call fails with `TIMEOUT`.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// HTTP transport for the TradeLink backend
///
/// Performs a single network call with an enforced deadline and converts raw
/// failures into the [`ApiError`] taxonomy. The bearer token is explicit
/// client state with `set_token`/`clear_token` mutators; each call reads
/// whatever token value is current at call start.
pub struct HttpTransport {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    /// Create a transport from backend settings
    pub fn new(settings: &BackendSettings) -> Result<Self, ApiError> {
        let timeout = settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
            token: RwLock::new(settings.bearer_token.clone()),
        })
    }

    /// Set the bearer token attached to subsequent calls (sign-in)
    pub fn set_token(&self, token: impl Into<String>) {
        *self.write_token() = Some(token.into());
    }

    /// Clear the bearer token (sign-out)
    pub fn clear_token(&self) {
        *self.write_token() = None;
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.client.get(self.url(path))).await
    }

    /// GET with URL-encoded filter parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let pairs: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        let url = format!("{}?{}", self.url(path), pairs.join("&"));
        self.execute(self.client.get(url)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.client.patch(self.url(path)).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.client.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn write_token(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Issue the request and classify the outcome
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let mut request = request.header(CONTENT_TYPE, "application/json");

        // Token value is fixed at call start; no mid-flight swap.
        let token = self
            .token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            // Error body becomes the details; an unparseable body degrades to
            // the status text.
            let details: Value = response
                .json()
                .await
                .unwrap_or_else(|_| json!({ "message": reason }));
            tracing::debug!(status = status.as_u16(), "backend returned error status");
            return Err(ApiError::from_status(status.as_u16(), details));
        }

        response.json::<T>().await.map_err(|e| ApiError {
            code: crate::client::ErrorCode::Server,
            message: format!("invalid response body: {}", e),
            status: Some(status.as_u16()),
            details: None,
        })
    }
}

/// Map a reqwest failure with no usable response onto the taxonomy
///
/// A deadline cancellation becomes `TIMEOUT`; everything else is `NETWORK`.
fn classify_transport_failure(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout()
    } else {
        ApiError::network(error.to_string())
    }
}

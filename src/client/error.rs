use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Closed set of failure classifications for backend calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No response was obtained from the backend
    Network,
    /// The 15-second deadline elapsed before a response arrived
    Timeout,
    /// 401 or 403
    Auth,
    /// 404
    NotFound,
    /// Any other non-success status
    Server,
    /// Translation-boundary bucket for errors the transport never produces
    Unknown,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCode::Network => "NETWORK",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Auth => "AUTH",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Server => "SERVER",
            ErrorCode::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A classified backend failure
///
/// `status` is present only when an HTTP response was received; `details`
/// carries the parsed error body when one was available.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

impl ApiError {
    /// Classify a non-success HTTP response
    ///
    /// 401/403 map to `Auth`, 404 to `NotFound`, everything else (including
    /// all 5xx) to `Server`.
    pub fn from_status(status: u16, details: Value) -> Self {
        let code = match status {
            401 | 403 => ErrorCode::Auth,
            404 => ErrorCode::NotFound,
            _ => ErrorCode::Server,
        };

        let message = detail_message(&details)
            .unwrap_or_else(|| format!("request failed with status {}", status));

        Self {
            code,
            message,
            status: Some(status),
            details: Some(details),
        }
    }

    /// Transport-level failure with no response
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Network,
            message: message.into(),
            status: None,
            details: None,
        }
    }

    /// Deadline exceeded; the in-flight request was cancelled
    pub fn timeout() -> Self {
        Self {
            code: ErrorCode::Timeout,
            message: "request deadline exceeded".to_string(),
            status: None,
            details: None,
        }
    }

    /// Boundary conversion for errors that carry no classification
    ///
    /// The transport never produces `Unknown`; this exists so opaque errors
    /// can cross into the translator as a tagged variant instead of being
    /// shape-probed at runtime.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Unknown,
            message: message.into(),
            status: None,
            details: None,
        }
    }

    /// Whether the retry policy may re-attempt after this failure
    ///
    /// Eligible: no status at all (pure transport failure) or status >= 500.
    /// Auth, NotFound and other 4xx responses are never retried.
    pub fn is_retryable(&self) -> bool {
        match self.status {
            None => true,
            Some(status) => status >= 500,
        }
    }

    /// Best human-readable string buried in the error details, if any
    pub fn detail_message(&self) -> Option<String> {
        self.details.as_ref().and_then(detail_message)
    }
}

/// Pull a `message` or `error` string field out of an error body
fn detail_message(details: &Value) -> Option<String> {
    details
        .get("message")
        .or_else(|| details.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

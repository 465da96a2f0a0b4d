use crate::client::error::{ApiError, ErrorCode};

/// Call-site context used to specialise user-facing wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorContext {
    #[default]
    General,
    ProfileSave,
    Payment,
    AiSuggestion,
}

/// User-facing rendering of a failure
///
/// UI code shows this tuple, never a raw error or stack trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub title: String,
    pub message: String,
    pub action: Option<String>,
    pub can_retry: bool,
}

/// Map a classified error (plus call context) to user-facing copy
///
/// `can_retry` is false only for `AUTH` and `NOT_FOUND`; every other code is
/// retryable from the user's perspective. Context overrides replace the
/// message text for `NETWORK`/`TIMEOUT`/`AUTH` only, except the payment
/// processor special case on `SERVER`.
pub fn translate(error: &ApiError, context: ErrorContext) -> UserMessage {
    let mut rendered = match error.code {
        ErrorCode::Network => UserMessage {
            title: "Connection problem".to_string(),
            message: "We couldn't reach TradeLink. Check your connection and try again."
                .to_string(),
            action: Some("Retry".to_string()),
            can_retry: true,
        },
        ErrorCode::Timeout => UserMessage {
            title: "Request timed out".to_string(),
            message: "The server took too long to respond. Please try again.".to_string(),
            action: Some("Retry".to_string()),
            can_retry: true,
        },
        ErrorCode::Auth => UserMessage {
            title: "Session expired".to_string(),
            message: "Please sign in again to continue.".to_string(),
            action: Some("Sign in".to_string()),
            can_retry: false,
        },
        ErrorCode::NotFound => UserMessage {
            title: "Not found".to_string(),
            message: error
                .detail_message()
                .unwrap_or_else(|| "We couldn't find what you were looking for.".to_string()),
            action: None,
            can_retry: false,
        },
        ErrorCode::Server => UserMessage {
            title: "Something went wrong".to_string(),
            message: error.detail_message().unwrap_or_else(|| {
                "The server hit an unexpected problem. Please try again shortly.".to_string()
            }),
            action: Some("Retry".to_string()),
            can_retry: true,
        },
        ErrorCode::Unknown => UserMessage {
            title: "Unexpected error".to_string(),
            message: "Something unexpected happened. Please try again.".to_string(),
            action: Some("Retry".to_string()),
            can_retry: true,
        },
    };

    if let Some(message) = context_message(error, context) {
        rendered.message = message;
    }

    rendered
}

/// Context-specific message override, if one applies
fn context_message(error: &ApiError, context: ErrorContext) -> Option<String> {
    let message = match (context, error.code) {
        (ErrorContext::ProfileSave, ErrorCode::Network) => {
            "Your profile changes couldn't be saved because you appear to be offline."
        }
        (ErrorContext::ProfileSave, ErrorCode::Timeout) => {
            "Saving your profile took too long. Your changes were not saved."
        }
        (ErrorContext::ProfileSave, ErrorCode::Auth) => {
            "Please sign in again before saving your profile."
        }
        (ErrorContext::Payment, ErrorCode::Network) => {
            "The payment service is unreachable. You have not been charged."
        }
        (ErrorContext::Payment, ErrorCode::Timeout) => {
            "The payment request timed out. Check your order history before retrying."
        }
        (ErrorContext::Payment, ErrorCode::Auth) => {
            "Please sign in again to complete your payment."
        }
        (ErrorContext::Payment, ErrorCode::Server) if details_mention(error, "stripe") => {
            "Our payment processor reported a problem. You have not been charged."
        }
        (ErrorContext::AiSuggestion, ErrorCode::Network) => {
            "Suggestions are unavailable while you're offline."
        }
        (ErrorContext::AiSuggestion, ErrorCode::Timeout) => {
            "Generating suggestions took too long. Try again in a moment."
        }
        (ErrorContext::AiSuggestion, ErrorCode::Auth) => {
            "Please sign in again to get suggestions."
        }
        // All other combinations fall through to the generic translation
        _ => return None,
    };

    Some(message.to_string())
}

/// Case-insensitive search of the error details for a marker string
fn details_mention(error: &ApiError, needle: &str) -> bool {
    error
        .details
        .as_ref()
        .map(|details| details.to_string().to_lowercase().contains(needle))
        .unwrap_or(false)
}

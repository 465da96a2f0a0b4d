// Transport, classification and retry exports
pub mod error;
pub mod retry;
pub mod translate;
pub mod transport;

pub use error::{ApiError, ErrorCode};
pub use retry::{RetryPolicy, DEFAULT_BACKOFF, DEFAULT_MAX_RETRIES};
pub use translate::{translate, ErrorContext, UserMessage};
pub use transport::{HttpTransport, DEFAULT_TIMEOUT_SECS};

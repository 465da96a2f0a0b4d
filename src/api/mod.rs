//! Domain read/write accessors over the transport.
//!
//! Read accessors never surface an error: a failed remote call is logged and
//! substituted with the fallback dataset, tagged as [`Sourced::Fallback`] so
//! callers and tests can tell degraded data from live data. Write accessors
//! propagate the classified [`ApiError`] unchanged.

pub mod jobs;
pub mod matching;
pub mod messaging;
pub mod moderation;
pub mod payments;
pub mod users;

use crate::client::{ApiError, HttpTransport, RetryPolicy};
use crate::config::Settings;
use crate::fallback::FallbackDataset;
use std::sync::Arc;

/// Tagged provenance of accessor data
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    /// Returned by the live backend
    Live(T),
    /// Substituted from the local dataset after a remote failure
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(value) | Sourced::Fallback(value) => value,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Sourced::Live(value) | Sourced::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Sourced::Live(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        match self {
            Sourced::Live(value) => Sourced::Live(f(value)),
            Sourced::Fallback(value) => Sourced::Fallback(f(value)),
        }
    }
}

/// Backend-integration client for the TradeLink marketplace
///
/// One method per resource/operation; every call goes through the retry
/// policy and the transport's deadline and classification.
pub struct MarketplaceApi {
    transport: Arc<HttpTransport>,
    retry: RetryPolicy,
    fallback: Arc<FallbackDataset>,
}

impl MarketplaceApi {
    pub fn new(
        transport: Arc<HttpTransport>,
        retry: RetryPolicy,
        fallback: Arc<FallbackDataset>,
    ) -> Self {
        Self {
            transport,
            retry,
            fallback,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(&settings.backend)?),
            retry: RetryPolicy::from_settings(&settings.retry),
            fallback: Arc::new(FallbackDataset::new()),
        })
    }

    /// The underlying transport, e.g. for `set_token`/`clear_token`
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub fn fallback(&self) -> &FallbackDataset {
        &self.fallback
    }
}

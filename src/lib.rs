//! TradeLink API - resilient backend-integration client for the TradeLink
//! services marketplace
//!
//! Every feature reads and writes remote state through this layer: classified
//! errors, an enforced per-request deadline, bounded retry, and deterministic
//! degradation to a local substitute dataset when the backend is unreachable.
//! The pure business computations that ride on top (the provider-matching
//! fallback heuristic and the tier progression calculator) live in `core`.

pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod fallback;
pub mod models;

// Re-export commonly used types
pub use api::{MarketplaceApi, Sourced};
pub use client::{translate, ApiError, ErrorCode, ErrorContext, HttpTransport, RetryPolicy, UserMessage};
pub use core::{fallback_candidates, tier_progress, tier_progress_with};
pub use fallback::FallbackDataset;
pub use models::{MatchCandidate, TierProgress};

//! # okr-client
//!
//! Thin HTTP client for the OKR SMART-goal generation service, plus the
//! two resilience pieces that sit in front of it.
//!
//! ## Key components
//!
//! - [`ApiConfig`] — endpoint selection (local vs. deployed profile, env
//!   override), request timeout, and the fallback feature flag
//! - [`ApiClient`] — JSON-over-POST calls for generate / save / edit /
//!   login, each unwrapping the service's success-flag envelope
//! - [`RetryPolicy`] / [`with_retry`] — generic bounded retry with
//!   monotonically increasing backoff over any async fallible operation
//! - [`fallback_goals`] — deterministic local goal set substituted when
//!   the upstream is unreachable and fallback is enabled

pub mod api;
pub mod config;
pub mod error;
pub mod fallback;
pub mod retry;

pub use api::{ApiClient, GenerateOutcome, GenerateRequest, UserProfile};
pub use config::{ApiConfig, ApiProfile};
pub use error::ClientError;
pub use fallback::fallback_goals;
pub use retry::{with_retry, Retryable, RetryPolicy};

//! HTTP client module
//!
//! The reqwest-backed `Transport` used outside of tests.
//!
//! # Features
//!
//! - **Automatic Retries**: 5xx, timeouts and connection errors, with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;
mod rate_limit;

pub use client::{
    default_user_agent, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RetryPolicy,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

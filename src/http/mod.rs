//! HTTP transport module
//!
//! The network collaborator behind every service call and every page fetch.
//!
//! # Features
//!
//! - **Automatic Retries**: 429, 5xx, timeouts and connect errors with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **SDK Headers**: Per-operation analytics header
//! - **Path Encoding**: Ids are percent-encoded per path segment
//! - **Static Bearer Token**: Sent as `Authorization` when configured

mod client;
mod headers;
mod path;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use headers::{sdk_headers, SDK_ANALYTICS_HEADER};
pub use path::encode_path;
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;

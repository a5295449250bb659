//! HTTP client utilities
//!
//! Provides a reqwest::Client configured with a timeout and user agent.
//! Timeouts live here, at the transport layer; tool handlers do not impose
//! their own deadlines.

use reqwest::Client;
use std::time::Duration;

/// Default request timeout for API and upload traffic
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a reqwest Client with the given timeout
pub fn client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("postbridge/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

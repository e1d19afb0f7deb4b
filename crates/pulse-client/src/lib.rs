pub mod client;
pub mod error;
pub mod provider;

pub use client::PulseClient;
pub use error::{ClientError, ClientResult, FALLBACK_MESSAGE};
pub use provider::{fetch_analysis, AnalysisProvider};

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the analysis API
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits for the backend indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MARKETPULSE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: std::env::var("MARKETPULSE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

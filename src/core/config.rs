//! Client configuration
//!
//! The service endpoint is injected here at construction time rather than
//! read from process-wide constants, so two sessions can target two
//! different services in the same process.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for a board-sync session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote game service, e.g. `http://127.0.0.1:8000`
    pub service_base_url: Url,

    /// Per-request timeout in seconds. No retries are performed; a timeout
    /// is terminal for that single user action.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(service_base_url: Url) -> Self {
        Self {
            service_base_url,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve a path against the service base URL
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.service_base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .expect("service base URL cannot be a base");
            segments.pop_if_empty().push(path.trim_start_matches('/'));
        }
        url
    }
}

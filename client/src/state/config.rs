//! Backend location for the browser client.
//!
//! DESIGN
//! ======
//! The base URL is fixed at build time (`CARD_QA_BASE_URL`) because a static
//! page has no other configuration channel; unset builds talk to the local
//! QA backend.

use cards::{DEFAULT_BASE_URL, Endpoint};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the card backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(option_env!("CARD_QA_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a backend route.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.base_url)
    }

    /// Absolute URL for a form preview path, or `None` before any card loaded.
    #[must_use]
    pub fn preview_url(&self, preview_path: &str) -> Option<String> {
        if preview_path.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.base_url.trim_end_matches('/'), preview_path))
    }
}

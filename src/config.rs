//! API Configuration
//!
//! Holds the immutable per-process settings for talking to SignalFx: the
//! base endpoint and the auth token, plus helpers for building resource
//! endpoint URLs.

use serde::{Deserialize, Serialize};

/// Default SignalFx API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.signalfx.com/v2";

/// Endpoint and credentials for the SignalFx API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.signalfx.com/v2`.
    pub base_url: String,
    /// Token sent in the `X-SF-Token` header on every request.
    pub token: String,
}

impl ApiConfig {
    /// Configuration against the production SignalFx endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Configuration against a custom endpoint (test servers, proxies).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Build the chart collection URL.
    pub fn chart_url(&self) -> String {
        format!("{}/chart", self.base_url)
    }

    /// Build the URL of one chart.
    pub fn chart_url_for(&self, id: &str) -> String {
        format!("{}/chart/{}", self.base_url, id)
    }

    /// Build the dashboard collection URL.
    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }

    /// Build the URL of one dashboard.
    pub fn dashboard_url_for(&self, id: &str) -> String {
        format!("{}/dashboard/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_urls() {
        let config = ApiConfig::new("secret");
        assert_eq!(config.chart_url(), "https://api.signalfx.com/v2/chart");
        assert_eq!(
            config.chart_url_for("abc123"),
            "https://api.signalfx.com/v2/chart/abc123"
        );
        assert_eq!(
            config.dashboard_url(),
            "https://api.signalfx.com/v2/dashboard"
        );
    }

    #[test]
    fn test_custom_base_url_trims_trailing_slash() {
        let config = ApiConfig::with_base_url("secret", "http://localhost:8080/");
        assert_eq!(config.chart_url(), "http://localhost:8080/chart");
        assert_eq!(
            config.dashboard_url_for("d1"),
            "http://localhost:8080/dashboard/d1"
        );
    }
}

//! HTTP utilities for SignalFx REST API calls

use reqwest::{header, Client, Method};
use serde_json::Value;

use crate::error::SyncError;

/// Header carrying the auth token on every request.
pub const AUTH_HEADER: &str = "X-SF-Token";

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and masks non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Back off to a char boundary; byte 200 can fall inside a
        // multi-byte character
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..end],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Status code and full body of one API response. Non-2xx statuses are not
/// errors at this layer; the lifecycle operations interpret them.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client wrapper for SignalFx API calls
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new() -> Result<Self, SyncError> {
        let client = Client::builder()
            .user_agent(concat!("signalsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SyncError::Client { source })?;

        Ok(Self { client })
    }

    /// Send one authenticated JSON request and read the full response body.
    ///
    /// A send failure yields [`SyncError::Transport`] with no status code; a
    /// body-read failure yields [`SyncError::BodyRead`] carrying the status
    /// that was already received. There are no retries.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        token: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, SyncError> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(AUTH_HEADER, token);

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|source| SyncError::Transport {
            method: method.clone(),
            source,
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| SyncError::BodyRead {
                method,
                status,
                source,
            })?;

        if status >= 400 {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::debug!("SignalFx returned {}: {}", status, sanitize_for_log(&body));
        }

        Ok(ApiResponse { status, body })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP transport")
    }
}

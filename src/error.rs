//! Error types for synchronization operations
//!
//! Every lifecycle operation fails into exactly one of these kinds; none of
//! them is retried internally. Validation failures are not errors: the
//! validators in [`crate::validate`] return message lists instead.

use thiserror::Error;

/// Result alias used across the crate.
pub type SyncResult<T> = Result<T, SyncError>;

/// Error that can occur while synchronizing a resource with SignalFx.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to create HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response (connection refused, DNS
    /// failure, timeout). No status code is available.
    #[error("failed sending {method} request to SignalFx: {source}")]
    Transport {
        method: reqwest::Method,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be fully read. Carries the
    /// status code that was already received.
    #[error("failed reading response body from {method} request (status {status}): {source}")]
    BodyRead {
        method: reqwest::Method,
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape the operation expects.
    #[error("failed decoding response for the resource {resource} during {phase}: {source}")]
    Decode {
        resource: String,
        phase: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// SignalFx answered with an unexpected status code.
    #[error("for the resource {resource} SignalFx returned status {status}:\n{body}")]
    Upstream {
        resource: String,
        status: u16,
        body: String,
    },

    /// A relative time expression did not match `-<integer><unit>`.
    #[error("{input:?} is not a relative time range; use milliseconds from epoch or the compact syntax (e.g. -5m, -1h)")]
    InvalidTimeRange { input: String },

    /// The magnitude of a relative time expression did not fit an integer.
    #[error("invalid magnitude in time range {input:?}: {source}")]
    TimeRangeMagnitude {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The magnitude parsed but scaling it to milliseconds overflowed.
    #[error("time range {input:?} is too large to express in milliseconds")]
    TimeRangeOverflow { input: String },
}

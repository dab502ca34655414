//! signalsync - synchronization core for SignalFx resources
//!
//! Implements the create/read/update/delete lifecycle against the SignalFx
//! REST API with timestamp-based drift detection, plus the small validation
//! and conversion utilities a configuration host needs before issuing a
//! request.
//!
//! # Module Structure
//!
//! - [`api`] - HTTP transport and lifecycle operations
//! - [`config`] - API endpoint and token configuration
//! - [`state`] - local per-resource synchronization state
//! - [`validate`] - pure field validators and the chart color palette
//! - [`timerange`] - compact relative time-range parsing
//! - [`options`] - chart option payload builders
//! - [`error`] - typed error kinds for every failure mode
//!
//! The crate performs one synchronous call per operation and surfaces
//! failures immediately: no retries, no batching, no caching. Callers are
//! expected to serialize operations per resource.

pub mod api;
pub mod config;
pub mod error;
pub mod options;
pub mod state;
pub mod timerange;
pub mod validate;

pub use api::client::{SfxClient, LAST_UPDATED_OFFSET};
pub use api::http::{ApiResponse, HttpTransport, AUTH_HEADER};
pub use config::ApiConfig;
pub use error::{SyncError, SyncResult};
pub use options::ColorScale;
pub use state::ResourceState;

//! SignalFx API interaction module
//!
//! This module provides the core functionality for synchronizing resources
//! with the SignalFx REST API.
//!
//! # Module Structure
//!
//! - [`http`] - HTTP transport for authenticated JSON requests
//! - [`client`] - Resource lifecycle operations (create/read/update/delete)
//!
//! # Example
//!
//! ```ignore
//! use signalsync::{ApiConfig, ResourceState, SfxClient};
//!
//! async fn example() -> Result<(), signalsync::SyncError> {
//!     let client = SfxClient::new(ApiConfig::new("my-token"))?;
//!     let mut state = ResourceState::new("cpu-chart");
//!     let payload = serde_json::json!({"name": "cpu-chart"});
//!     client.create(&client.config.chart_url(), &payload, &mut state).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;

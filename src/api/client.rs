//! SignalFx Client
//!
//! Main client for synchronizing resources with SignalFx, combining endpoint
//! configuration and HTTP transport with the four lifecycle operations.
//!
//! Read performs drift detection: SignalFx post-processing can bump
//! `lastUpdated` shortly after a write, so the remote timestamp must move
//! past the locally recorded one by more than [`LAST_UPDATED_OFFSET`] before
//! the resource counts as modified out-of-band.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::http::{ApiResponse, HttpTransport};
use crate::config::ApiConfig;
use crate::error::SyncError;
use crate::state::ResourceState;

/// Tolerance (epoch milliseconds) added to the local timestamp before a
/// newer remote `lastUpdated` is declared drift.
pub const LAST_UPDATED_OFFSET: f64 = 10_000.0;

/// Substring SignalFx puts in error bodies for deleted resources.
const NOT_FOUND_MARKER: &str = "Resource not found";

/// Response envelope for a successful create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedResource {
    id: String,
    last_updated: f64,
}

/// Response envelope for successful read and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TouchedResource {
    last_updated: f64,
}

/// Main SignalFx client
#[derive(Clone)]
pub struct SfxClient {
    pub config: ApiConfig,
    pub http: HttpTransport,
}

impl SfxClient {
    /// Create a new SignalFx client
    pub fn new(config: ApiConfig) -> Result<Self, SyncError> {
        Ok(Self {
            config,
            http: HttpTransport::new()?,
        })
    }

    /// Create the resource remotely (POST).
    ///
    /// On 200 the server-assigned id and `lastUpdated` are recorded and the
    /// state is marked synced. Any other status leaves the state untouched.
    pub async fn create(
        &self,
        url: &str,
        payload: &Value,
        state: &mut ResourceState,
    ) -> Result<(), SyncError> {
        let resp = self
            .http
            .send(Method::POST, url, &self.config.token, Some(payload))
            .await?;

        if resp.status != 200 {
            return Err(upstream(&state.name, &resp));
        }

        let created: CreatedResource = decode(&resp.body, &state.name, "creation")?;
        state.id = Some(created.id);
        state.last_updated = created.last_updated;
        state.synced = true;
        Ok(())
    }

    /// Read the resource and reconcile local state (GET).
    ///
    /// A remote `lastUpdated` beyond the local timestamp plus
    /// [`LAST_UPDATED_OFFSET`] means the resource was modified out-of-band:
    /// `synced` is cleared and the local timestamp advances to the remote
    /// value. A body containing "Resource not found" means it was deleted
    /// upstream: the id is cleared and the call succeeds. Nothing else on
    /// the state is ever overwritten here.
    pub async fn read(&self, url: &str, state: &mut ResourceState) -> Result<(), SyncError> {
        let resp = self
            .http
            .send(Method::GET, url, &self.config.token, None)
            .await?;

        if resp.status == 200 {
            let remote: TouchedResource = decode(&resp.body, &state.name, "read")?;
            if remote.last_updated > state.last_updated + LAST_UPDATED_OFFSET {
                state.synced = false;
                state.last_updated = remote.last_updated;
            }
            return Ok(());
        }

        if resp.body.contains(NOT_FOUND_MARKER) {
            // Deleted in the SignalFx UI; dropping the id makes the host recreate it
            state.clear_id();
            return Ok(());
        }

        Err(upstream(&state.name, &resp))
    }

    /// Push the desired configuration to the resource (PUT).
    pub async fn update(
        &self,
        url: &str,
        payload: &Value,
        state: &mut ResourceState,
    ) -> Result<(), SyncError> {
        let resp = self
            .http
            .send(Method::PUT, url, &self.config.token, Some(payload))
            .await?;

        if resp.status != 200 {
            return Err(upstream(&state.name, &resp));
        }

        let remote: TouchedResource = decode(&resp.body, &state.name, "update")?;
        state.synced = true;
        state.last_updated = remote.last_updated;
        Ok(())
    }

    /// Delete the resource remotely (DELETE).
    ///
    /// Any status below 400, and 404 (already gone), clear the id and count
    /// as success; everything else is an upstream error and the id is kept.
    pub async fn delete(&self, url: &str, state: &mut ResourceState) -> Result<(), SyncError> {
        let resp = self
            .http
            .send(Method::DELETE, url, &self.config.token, None)
            .await?;

        if resp.status < 400 || resp.status == 404 {
            state.clear_id();
            return Ok(());
        }

        Err(upstream(&state.name, &resp))
    }
}

fn decode<'a, T: Deserialize<'a>>(
    body: &'a str,
    resource: &str,
    phase: &'static str,
) -> Result<T, SyncError> {
    serde_json::from_str(body).map_err(|source| SyncError::Decode {
        resource: resource.to_string(),
        phase,
        source,
    })
}

fn upstream(resource: &str, resp: &ApiResponse) -> SyncError {
    SyncError::Upstream {
        resource: resource.to_string(),
        status: resp.status,
        body: resp.body.clone(),
    }
}

//! Local synchronization state
//!
//! Mirrors the subset of a remote SignalFx resource the host tool tracks
//! between runs. The crate only reads and writes these fields; persisting
//! them is the host's concern.

use serde::{Deserialize, Serialize};

/// Locally recorded state for one remote resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Server-assigned identifier. `None` means the resource has no known
    /// remote counterpart and should be (re)created.
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable name, used in error messages.
    pub name: String,
    /// `lastUpdated` timestamp (epoch milliseconds) last observed locally.
    #[serde(default)]
    pub last_updated: f64,
    /// True while the local configuration is believed to match the remote
    /// resource. Cleared by read when out-of-band drift is detected.
    #[serde(default)]
    pub synced: bool,
}

impl ResourceState {
    /// Fresh state for a resource that has never been created remotely.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Drop the remote identifier, signalling that the resource must be
    /// recreated on the next apply.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Whether a remote counterpart is currently known.
    pub fn exists(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_no_id() {
        let state = ResourceState::new("cpu-chart");
        assert!(!state.exists());
        assert_eq!(state.name, "cpu-chart");
        assert_eq!(state.last_updated, 0.0);
        assert!(!state.synced);
    }

    #[test]
    fn test_clear_id_drops_identifier() {
        let mut state = ResourceState::new("cpu-chart");
        state.id = Some("abc123".to_string());
        assert!(state.exists());

        state.clear_id();
        assert!(!state.exists());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = ResourceState {
            id: Some("abc123".to_string()),
            name: "cpu-chart".to_string(),
            last_updated: 1234567890123.0,
            synced: true,
        };

        let encoded = serde_json::to_string(&state).unwrap();
        let decoded: ResourceState = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, state);
    }
}

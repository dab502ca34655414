//! Option builders
//!
//! Assemble the nested JSON option payloads SignalFx charts accept from
//! typed configuration values.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Color-scale configuration for a single-value chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Threshold boundaries. Kept descending in the built payload whatever
    /// the configured order.
    pub thresholds: Vec<i64>,
    /// Swap the color direction across the thresholds.
    pub inverted: bool,
}

/// Build the `colorScaleOptions` payload. Thresholds are sorted
/// highest-to-lowest, the order SignalFx expects.
pub fn color_scale_options(scale: &ColorScale) -> Value {
    let mut thresholds = scale.thresholds.clone();
    thresholds.sort_unstable_by(|a, b| b.cmp(a));

    json!({
        "thresholds": thresholds,
        "inverted": scale.inverted,
    })
}

/// Build the `legendOptions` payload hiding the given fields. Every listed
/// property is emitted with `enabled: false`. Returns `None` when there is
/// nothing to hide, meaning no legend customization is sent at all.
pub fn legend_options(fields_to_hide: &[String]) -> Option<Value> {
    if fields_to_hide.is_empty() {
        return None;
    }

    let fields: Vec<Value> = fields_to_hide
        .iter()
        .map(|property| {
            json!({
                "property": property,
                "enabled": false,
            })
        })
        .collect();

    Some(json!({ "fields": fields }))
}

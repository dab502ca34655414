//! Field validators for chart and dashboard configuration
//!
//! Each validator is a pure function taking a configured value and returning
//! a list of human-readable messages; an empty list means the value is
//! accepted. Validation never aborts the process, it is surfaced to whatever
//! invokes it before a request is attempted.

use std::sync::LazyLock;

use regex::Regex;

/// Chart palette: accepted color names and the hex values they render as.
pub const CHART_COLORS: &[(&str, &str)] = &[
    ("gray", "#999999"),
    ("blue", "#0077c2"),
    ("navy", "#6CA2B7"),
    ("orange", "#b04600"),
    ("yellow", "#e5b312"),
    ("magenta", "#bd468d"),
    ("purple", "#e9008a"),
    ("violet", "#876ffe"),
    ("lilac", "#a747ff"),
    ("green", "#05ce00"),
    ("aquamarine", "#0dba8f"),
];

/// Accepted values for `time_span_type`.
pub const TIME_SPAN_TYPES: &[&str] = &["relative", "absolute"];

static RELATIVE_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+[mhdw]").expect("valid pattern"));

/// Look up the hex value a validated color name renders as.
pub fn color_hex(name: &str) -> Option<&'static str> {
    CHART_COLORS
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, hex)| *hex)
}

/// Validate a chart color against the closed palette.
pub fn validate_chart_color(value: &str) -> Vec<String> {
    if CHART_COLORS.iter().any(|(color, _)| *color == value) {
        return Vec::new();
    }
    let accepted = CHART_COLORS
        .iter()
        .map(|(color, _)| *color)
        .collect::<Vec<_>>()
        .join(", ");
    vec![format!("{value} not allowed; must be either {accepted}")]
}

/// Validate the time-span type against relative/absolute.
pub fn validate_time_span_type(value: &str) -> Vec<String> {
    if TIME_SPAN_TYPES.contains(&value) {
        return Vec::new();
    }
    vec![format!(
        "{value} not allowed; must be either relative or absolute"
    )]
}

/// Validate that a sort-by field starts with `+` or `-`.
pub fn validate_sort_by(value: &str) -> Vec<String> {
    if value.starts_with('+') || value.starts_with('-') {
        return Vec::new();
    }
    vec![format!(
        "{value} not allowed; must start either with + or - (ascending or descending)"
    )]
}

/// Validate the compact relative-time syntax (`-5m`, `-1h`, `-2d`, `-1w`).
pub fn validate_relative_time(value: &str) -> Vec<String> {
    if RELATIVE_TIME_RE.is_match(value) {
        return Vec::new();
    }
    vec![format!(
        "{value} not allowed; use milliseconds from epoch or the relative time syntax (e.g. -5m, -1h)"
    )]
}

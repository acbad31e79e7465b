//! Path encoding
//!
//! Turns an [`OperationSet`] into the canonical path the image service parses:
//!
//! ```text
//! fit-in/200x300@2x/north/blur:5
//! ```
//!
//! `tile`, `map` and `palette` (checked in that order) replace the whole path
//! with a single segment. Otherwise each entry yields one segment, in
//! insertion order, joined with `/`. `retina` never yields its own segment; it
//! is appended to `resize` as `@<n>x`.

use crate::operations::vocabulary::is_concatenated;
use crate::operations::{OperationSet, OperationValue};

/// Encode an operation set into its path
pub fn encode(operations: &OperationSet) -> String {
    if let Some(segment) = exclusive_segment(operations) {
        return segment;
    }

    segments(operations).join("/")
}

/// Path segments for the generic walk, in order
///
/// Ignores `tile`/`map`/`palette` precedence; use [`encode`] for the full
/// grammar.
pub fn segments(operations: &OperationSet) -> Vec<String> {
    operations
        .iter()
        .filter(|(name, _)| *name != "retina")
        .map(|(name, value)| segment(name, value, operations))
        .collect()
}

fn exclusive_segment(operations: &OperationSet) -> Option<String> {
    if operations.has("tile") {
        return Some("tile".to_string());
    }

    if operations.has("map") {
        return Some("map".to_string());
    }

    operations.get("palette").map(|value| {
        if value.is_blank() {
            "palette".to_string()
        } else {
            format!("palette:{}", value)
        }
    })
}

fn segment(name: &str, value: &OperationValue, operations: &OperationSet) -> String {
    match name {
        "crop" => value.to_string(),
        "resize" => {
            let mut command = match value {
                OperationValue::NumPair(width, height) => format!("{}x{}", width, height),
                other => other.to_string(),
            };
            if let Some(retina) = operations.get("retina") {
                command.push_str(&format!("@{}x", retina));
            }
            command
        }
        "align" => alignment(&value.to_string()),
        "face" => match value {
            OperationValue::Text(text) if text == "focused" => "face:focused".to_string(),
            _ => "face".to_string(),
        },
        _ if is_concatenated(name) => format!("{}:{}", name.to_lowercase(), value),
        _ => name.to_lowercase(),
    }
}

/// Map an alignment keyword onto the service's gravity names
///
/// `top`, `right` and `bottom` become compass points. `left` becomes `weast`,
/// which is the spelling the service has always been sent. Anything else is
/// passed through lower-cased.
pub fn alignment(keyword: &str) -> String {
    let keyword = keyword.to_lowercase();
    match keyword.as_str() {
        "top" => "north".to_string(),
        "left" => "weast".to_string(),
        "right" => "east".to_string(),
        "bottom" => "south".to_string(),
        _ => keyword,
    }
}

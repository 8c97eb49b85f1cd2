//! JSON document save/load.
//!
//! Documents are the full-fidelity project format: workspace metadata plus
//! every object, including the persisted host keys (names, link data,
//! extension fields). Both directions normalize legacy `"type": "text"`
//! tags to `"textbox"` so documents written by older builds keep loading.

use crate::error::ExportResult;
use nyvo_core::SceneSnapshot;
use serde_json::Value;

/// Host-facing keys persisted beyond the core geometry, as spelled in the
/// document format (`editable` lives inside a textbox's `style`).
pub const DOCUMENT_KEYS: [&str; 8] = [
    "name",
    "gradientAngle",
    "selectable",
    "hasControls",
    "linkData",
    "editable",
    "extension",
    "extenstionType",
];

/// Serialize a document, normalize type tags, pretty-print.
pub fn to_document_json(doc: &SceneSnapshot) -> ExportResult<String> {
    let mut value = serde_json::to_value(doc)?;
    rewrite_text_tags(&mut value);
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Parse a document. Malformed input fails the whole load — no partial
/// recovery.
pub fn parse_document(json: &str) -> ExportResult<SceneSnapshot> {
    let mut value: Value = serde_json::from_str(json)?;
    rewrite_text_tags(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Rewrite legacy `"type": "text"` tags to `"textbox"`, recursing through
/// nested `objects` arrays.
pub fn rewrite_text_tags(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("text") {
                map.insert("type".to_string(), Value::String("textbox".to_string()));
            }
            if let Some(children) = map.get_mut("objects") {
                rewrite_text_tags(children);
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_text_tags(item);
            }
        }
        _ => {}
    }
}

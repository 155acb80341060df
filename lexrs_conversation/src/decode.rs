//! Decoding of raw post-content results into caller-facing responses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use lexrs_core::{PostContentResult, Slot, TurnResponse};
use tracing::warn;

/// Flatten a raw result into the caller's turn response.
///
/// Total: this never fails. The message and scalar fields are copied
/// verbatim, the audio body passes through untouched, the enums render as
/// their canonical labels, and the slot blob decodes into key/value pairs in
/// the order the service listed them. A malformed slot blob degrades to an
/// empty slot list.
#[must_use]
pub fn decode_turn(raw: PostContentResult) -> TurnResponse {
    TurnResponse {
        text_response: raw.message,
        audio_response: raw.audio,
        slots: decode_slots(&raw.slots),
        intent_name: raw.intent_name,
        session_attributes: raw.session_attributes,
        message_format_type: raw.message_format.label().to_string(),
        dialog_state: raw.dialog_state.label().to_string(),
        slot_to_elicit: raw.slot_to_elicit,
    }
}

/// Decode the base64 JSON slot blob into ordered key/value pairs.
///
/// An absent blob is an empty slot list, not an error. Trailing NULs and
/// whitespace in the decoded text are tolerated before parsing.
fn decode_slots(blob: &str) -> Vec<Slot> {
    if blob.is_empty() {
        return Vec::new();
    }

    let bytes = match BASE64_STANDARD.decode(blob) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Discarding slot blob that is not valid base64: {e}");
            return Vec::new();
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let trimmed = text.trim_end_matches('\0').trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let map: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(trimmed) {
        Ok(map) => map,
        Err(e) => {
            warn!("Discarding slot blob that is not a JSON object: {e}");
            return Vec::new();
        }
    };

    map.into_iter()
        .map(|(key, value)| Slot {
            key,
            value: match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
        })
        .collect()
}

//! Wire-shaped types exchanged with the remote conversational runtime.
//!
//! These mirror the post-content exchange: a structured request addressed by
//! the bot/alias/user triple, and a multi-part result carrying scalar header
//! fields, a base64 slot blob, and a binary audio body.

/// Outbound post-content request.
///
/// Assembled by the interactor from the session configuration and the
/// caller's turn request; the payload is the raw utterance bytes (UTF-8 text
/// or encoded audio, per `content_type`).
#[derive(Debug, Clone)]
pub struct PostContentRequest {
    pub bot_name: String,
    pub bot_alias: String,
    pub user_id: String,
    pub content_type: String,
    pub accept_type: String,
    pub payload: Vec<u8>,
}

/// Raw post-content result as the service returned it.
///
/// `slots` is still the base64-encoded JSON blob and the enums still carry
/// their wire values; flattening into the caller-facing shape happens in the
/// decoder.
#[derive(Debug, Clone, Default)]
pub struct PostContentResult {
    pub content_type: String,
    pub intent_name: String,
    pub slots: String,
    pub session_attributes: String,
    pub message: String,
    pub message_format: MessageFormat,
    pub dialog_state: DialogState,
    pub slot_to_elicit: String,
    pub audio: Vec<u8>,
}

/// Format of the message returned with a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    PlainText,
    CustomPayload,
    Ssml,
    Composite,
    /// Sentinel for wire values this build does not know about.
    #[default]
    Unknown,
}

impl MessageFormat {
    /// Parse a wire value; unrecognized input maps to [`Self::Unknown`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "PlainText" => Self::PlainText,
            "CustomPayload" => Self::CustomPayload,
            "SSML" => Self::Ssml,
            "Composite" => Self::Composite,
            _ => Self::Unknown,
        }
    }

    /// Canonical human-readable name, stable across wire encodings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlainText => "PlainText",
            Self::CustomPayload => "CustomPayload",
            Self::Ssml => "SSML",
            Self::Composite => "Composite",
            Self::Unknown => "Unknown",
        }
    }
}

/// Dialog state the remote session reached after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    ElicitIntent,
    ConfirmIntent,
    ElicitSlot,
    Fulfilled,
    ReadyForFulfillment,
    Failed,
    /// Sentinel for wire values this build does not know about.
    #[default]
    Unknown,
}

impl DialogState {
    /// Parse a wire value; unrecognized input maps to [`Self::Unknown`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ElicitIntent" => Self::ElicitIntent,
            "ConfirmIntent" => Self::ConfirmIntent,
            "ElicitSlot" => Self::ElicitSlot,
            "Fulfilled" => Self::Fulfilled,
            "ReadyForFulfillment" => Self::ReadyForFulfillment,
            "Failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Canonical human-readable name, stable across wire encodings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ElicitIntent => "ElicitIntent",
            Self::ConfirmIntent => "ConfirmIntent",
            Self::ElicitSlot => "ElicitSlot",
            Self::Fulfilled => "Fulfilled",
            Self::ReadyForFulfillment => "ReadyForFulfillment",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod error;
pub mod wire;

pub use error::ErrorCode;
pub use wire::{DialogState, MessageFormat, PostContentRequest, PostContentResult};

/// Default content type for text turns.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
/// Default region the runtime endpoint is derived from.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Default connect timeout for the transport client, in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 9000;
/// Default request timeout for the transport client, in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 9000;

/// Session configuration for the remote conversational service.
///
/// Built once from a parameter source at adapter build time and immutable
/// afterwards; the interactor constructed from it takes ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexConfiguration {
    /// Caller identity the remote session is keyed on.
    pub user_id: String,
    /// Bot the session talks to.
    pub bot_name: String,
    /// Deployment alias of the bot.
    pub bot_alias: String,
    /// Content type used when a turn request does not carry one.
    pub content_type: String,
    /// Accept type used when a turn request does not carry one.
    pub accept_type: String,
    /// Region the runtime endpoint is derived from.
    pub region: String,
    /// Transport connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Transport request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for LexConfiguration {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            bot_name: String::new(),
            bot_alias: String::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept_type: DEFAULT_CONTENT_TYPE.to_string(),
            region: DEFAULT_REGION.to_string(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl LexConfiguration {
    /// Check the non-empty invariant on every field a session needs.
    ///
    /// The check is eager: the first empty field decides the failure.
    pub fn validate(&self) -> Result<(), ErrorCode> {
        let fields = [
            ("user_id", &self.user_id),
            ("bot_name", &self.bot_name),
            ("bot_alias", &self.bot_alias),
            ("content_type", &self.content_type),
            ("accept_type", &self.accept_type),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                warn!("Configuration field {name} is empty");
                return Err(ErrorCode::InvalidLexConfiguration);
            }
        }
        Ok(())
    }
}

/// Utterance payload of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPayload {
    Text(String),
    Audio(Vec<u8>),
}

impl TurnPayload {
    /// Raw bytes to put on the wire.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.clone().into_bytes(),
            Self::Audio(bytes) => bytes.clone(),
        }
    }
}

/// One conversation turn as the caller hands it in.
///
/// Empty `content_type` / `accept_type` fall back to the configured values
/// when the wire request is built.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub content_type: String,
    pub accept_type: String,
    pub payload: TurnPayload,
}

impl TurnRequest {
    /// Build a text turn with the default content types.
    #[must_use]
    pub fn text(utterance: impl Into<String>) -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept_type: DEFAULT_CONTENT_TYPE.to_string(),
            payload: TurnPayload::Text(utterance.into()),
        }
    }

    /// Build an audio turn; the caller supplies the codec content type.
    #[must_use]
    pub fn audio(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            accept_type: String::new(),
            payload: TurnPayload::Audio(bytes),
        }
    }

    /// Override the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Override the accept type.
    #[must_use]
    pub fn with_accept_type(mut self, accept_type: impl Into<String>) -> Self {
        self.accept_type = accept_type.into();
        self
    }
}

/// One slot the service extracted or is eliciting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub key: String,
    pub value: String,
}

/// Flat, caller-facing result of one conversation turn.
///
/// A failed turn leaves a caller-held value of this type entirely default;
/// callers may branch on any field only after a successful turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResponse {
    pub text_response: String,
    pub audio_response: Vec<u8>,
    /// Ordered as the decoded slot map listed its keys.
    pub slots: Vec<Slot>,
    pub intent_name: String,
    pub session_attributes: String,
    pub message_format_type: String,
    pub dialog_state: String,
    pub slot_to_elicit: String,
}

/// Transport seam to the remote conversational runtime.
///
/// One structured request in, one structured result or error out; no retry
/// policy lives behind this trait.
#[async_trait]
pub trait ConversationClient: Send + Sync {
    async fn post_content(
        &self,
        request: &PostContentRequest,
    ) -> anyhow::Result<PostContentResult>;
}

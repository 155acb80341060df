use std::time::Duration;

use async_trait::async_trait;
use lexrs_core::{
    ConversationClient, DialogState, LexConfiguration, MessageFormat, PostContentRequest,
    PostContentResult,
};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use tracing::{debug, info};

const HEADER_INTENT_NAME: &str = "x-amz-lex-intent-name";
const HEADER_SLOTS: &str = "x-amz-lex-slots";
const HEADER_SESSION_ATTRIBUTES: &str = "x-amz-lex-session-attributes";
const HEADER_MESSAGE: &str = "x-amz-lex-message";
const HEADER_MESSAGE_FORMAT: &str = "x-amz-lex-message-format";
const HEADER_DIALOG_STATE: &str = "x-amz-lex-dialog-state";
const HEADER_SLOT_TO_ELICIT: &str = "x-amz-lex-slot-to-elicit";

/// HTTP client for the runtime's post-content operation.
///
/// Scalar result fields travel in `x-amz-lex-*` response headers; the body
/// is the binary audio stream. Request signing is left to the endpoint (a
/// local emulator or a signing proxy); point `with_base_url` at it.
pub struct LexRuntimeClient {
    client: Client,
    base_url: String,
}

impl LexRuntimeClient {
    /// Build a client with the configured timeouts, targeting the regional
    /// runtime endpoint.
    pub fn new(configuration: &LexConfiguration) -> anyhow::Result<Self> {
        info!("Creating runtime client for region {}", configuration.region);
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(configuration.connect_timeout_ms))
            .timeout(Duration::from_millis(configuration.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("https://runtime.lex.{}.amazonaws.com", configuration.region),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn content_url(&self, request: &PostContentRequest) -> String {
        format!(
            "{}/bot/{}/alias/{}/user/{}/content",
            self.base_url, request.bot_name, request.bot_alias, request.user_id
        )
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn result_from_parts(headers: &HeaderMap, audio: Vec<u8>) -> PostContentResult {
    PostContentResult {
        content_type: header_string(headers, CONTENT_TYPE.as_str()),
        intent_name: header_string(headers, HEADER_INTENT_NAME),
        slots: header_string(headers, HEADER_SLOTS),
        session_attributes: header_string(headers, HEADER_SESSION_ATTRIBUTES),
        message: header_string(headers, HEADER_MESSAGE),
        message_format: MessageFormat::from_wire(&header_string(headers, HEADER_MESSAGE_FORMAT)),
        dialog_state: DialogState::from_wire(&header_string(headers, HEADER_DIALOG_STATE)),
        slot_to_elicit: header_string(headers, HEADER_SLOT_TO_ELICIT),
        audio,
    }
}

#[async_trait]
impl ConversationClient for LexRuntimeClient {
    async fn post_content(
        &self,
        request: &PostContentRequest,
    ) -> anyhow::Result<PostContentResult> {
        let url = self.content_url(request);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, &request.content_type)
            .header(ACCEPT, &request.accept_type)
            .body(request.payload.clone())
            .send()
            .await?
            .error_for_status()?;

        let headers = response.headers().clone();
        let audio = response.bytes().await?.to_vec();

        debug!(
            "Received {} audio bytes, dialog state {}",
            audio.len(),
            header_string(&headers, HEADER_DIALOG_STATE)
        );
        Ok(result_from_parts(&headers, audio))
    }
}

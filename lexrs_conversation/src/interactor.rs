//! The interactor owning single-flight access to the remote session.

use std::sync::Arc;

use lexrs_core::{
    ConversationClient, ErrorCode, LexConfiguration, PostContentRequest, TurnRequest, TurnResponse,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::decode::decode_turn;

/// Owner of the one outstanding conversational context.
///
/// The remote service tracks dialog state per user/bot/alias session, so an
/// interactor admits at most one turn at a time: a second `post_turn` while
/// one is in flight fails fast with [`ErrorCode::TurnInFlight`] and never
/// reaches the remote service.
pub struct LexInteractor {
    configuration: LexConfiguration,
    client: Arc<dyn ConversationClient>,
    turn_gate: Mutex<()>,
}

impl LexInteractor {
    /// Create an interactor from a validated configuration and a transport
    /// client.
    pub fn new(
        configuration: LexConfiguration,
        client: Arc<dyn ConversationClient>,
    ) -> Result<Self, ErrorCode> {
        configuration.validate()?;

        info!(
            "Creating interactor for bot {} (alias {}), user {}",
            configuration.bot_name, configuration.bot_alias, configuration.user_id
        );
        Ok(Self {
            configuration,
            client,
            turn_gate: Mutex::new(()),
        })
    }

    /// The configuration this interactor was built from.
    #[must_use]
    pub const fn configuration(&self) -> &LexConfiguration {
        &self.configuration
    }

    /// Post one conversation turn through the owned transport client.
    pub async fn post_turn(&self, request: &TurnRequest) -> Result<TurnResponse, ErrorCode> {
        let client = Arc::clone(&self.client);
        self.post_turn_with(request, &client).await
    }

    /// Post one conversation turn through a caller-supplied client.
    ///
    /// The stored configuration and the single-flight gate still apply; only
    /// the transport is substituted.
    pub async fn post_turn_with(
        &self,
        request: &TurnRequest,
        client: &Arc<dyn ConversationClient>,
    ) -> Result<TurnResponse, ErrorCode> {
        let Ok(_guard) = self.turn_gate.try_lock() else {
            warn!("Rejecting turn: another turn is already in flight");
            return Err(ErrorCode::TurnInFlight);
        };

        let wire_request = self.build_wire_request(request);
        debug!(
            "Posting {} bytes as {} for user {}",
            wire_request.payload.len(),
            wire_request.content_type,
            wire_request.user_id
        );

        match client.post_content(&wire_request).await {
            Ok(raw) => {
                debug!("Turn completed with dialog state {}", raw.dialog_state.label());
                Ok(decode_turn(raw))
            }
            Err(e) => {
                warn!("Remote call failed: {e}");
                Err(ErrorCode::RemoteCallFailed)
            }
        }
    }

    /// Assemble the wire request, falling back to configured content types
    /// when the turn request leaves them empty.
    fn build_wire_request(&self, request: &TurnRequest) -> PostContentRequest {
        let content_type = if request.content_type.is_empty() {
            self.configuration.content_type.clone()
        } else {
            request.content_type.clone()
        };
        let accept_type = if request.accept_type.is_empty() {
            self.configuration.accept_type.clone()
        } else {
            request.accept_type.clone()
        };

        PostContentRequest {
            bot_name: self.configuration.bot_name.clone(),
            bot_alias: self.configuration.bot_alias.clone(),
            user_id: self.configuration.user_id.clone(),
            content_type,
            accept_type,
            payload: request.payload.to_bytes(),
        }
    }
}

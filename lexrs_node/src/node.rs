use std::sync::Arc;

use lexrs_config::{ParameterSource, build_configuration};
use lexrs_conversation::LexInteractor;
use lexrs_core::{ConversationClient, ErrorCode, TurnRequest, TurnResponse};
use tracing::{info, warn};

/// Node-facing entry point composing validator, interactor and decoder.
///
/// The interactor keeps an internal conversation session, so it is only
/// reachable through this node's turn handlers.
pub struct LexNode {
    interactor: LexInteractor,
}

impl LexNode {
    /// Build a node: validate configuration, then create the interactor.
    ///
    /// The first failure's error code propagates unchanged. An absent
    /// transport client is an argument error, not a configuration error.
    pub fn build(
        params: &dyn ParameterSource,
        client: Option<Arc<dyn ConversationClient>>,
    ) -> Result<Self, ErrorCode> {
        let configuration = build_configuration(params)?;

        let Some(client) = client else {
            warn!("Cannot build node: no transport client supplied");
            return Err(ErrorCode::InvalidArgument);
        };

        let interactor = LexInteractor::new(configuration, client)?;
        Self::init(Some(interactor))
    }

    /// Adopt a pre-built interactor.
    pub fn init(interactor: Option<LexInteractor>) -> Result<Self, ErrorCode> {
        let Some(interactor) = interactor else {
            warn!("Cannot initialize node: no interactor supplied");
            return Err(ErrorCode::InvalidArgument);
        };

        info!(
            "Node ready for bot {} (alias {})",
            interactor.configuration().bot_name,
            interactor.configuration().bot_alias
        );
        Ok(Self { interactor })
    }

    /// Handle one turn request.
    ///
    /// On success the decoded result is assigned to `response` and `true` is
    /// returned. On any failure `response` is left exactly as the caller
    /// passed it in and `false` is returned; callers must ignore every field
    /// of the response after a `false`.
    pub async fn handle_turn(&self, request: &TurnRequest, response: &mut TurnResponse) -> bool {
        self.finish_turn(self.interactor.post_turn(request).await, response)
    }

    /// Handle one turn request through a caller-supplied transport client.
    pub async fn handle_turn_with(
        &self,
        request: &TurnRequest,
        client: &Arc<dyn ConversationClient>,
        response: &mut TurnResponse,
    ) -> bool {
        self.finish_turn(
            self.interactor.post_turn_with(request, client).await,
            response,
        )
    }

    fn finish_turn(
        &self,
        outcome: Result<TurnResponse, ErrorCode>,
        response: &mut TurnResponse,
    ) -> bool {
        match outcome {
            Ok(decoded) => {
                *response = decoded;
                true
            }
            Err(code) => {
                warn!(
                    "Turn failed for user {}: {code}",
                    self.interactor.configuration().user_id
                );
                false
            }
        }
    }
}

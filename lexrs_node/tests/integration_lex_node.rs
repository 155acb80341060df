//! Integration tests for the node-facing conversation adapter.
//!
//! These tests verify the complete flow of:
//! - Configuration validation at build time
//! - The boolean turn surface and its all-or-nothing response guarantee
//! - Single-flight access to the remote session

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use lexrs_config::{
    BOT_ALIAS_KEY, BOT_NAME_KEY, CONNECT_TIMEOUT_MS_KEY, ParameterSource, REGION_KEY,
    REQUEST_TIMEOUT_MS_KEY, USER_ID_KEY,
};
use lexrs_core::{
    ConversationClient, DialogState, ErrorCode, MessageFormat, PostContentRequest,
    PostContentResult, TurnRequest, TurnResponse,
};
use lexrs_node::LexNode;
use tokio::sync::Notify;

/// Parameter source backed by plain maps, as a middleware test harness
/// would provide it.
struct TestParameterSource {
    strings: HashMap<String, String>,
    ints: HashMap<String, i64>,
}

impl TestParameterSource {
    fn empty() -> Self {
        Self {
            strings: HashMap::new(),
            ints: HashMap::new(),
        }
    }

    fn new(user_id: &str, bot_name: &str, bot_alias: &str) -> Self {
        Self {
            strings: HashMap::from([
                (USER_ID_KEY.to_string(), user_id.to_string()),
                (BOT_NAME_KEY.to_string(), bot_name.to_string()),
                (BOT_ALIAS_KEY.to_string(), bot_alias.to_string()),
                (REGION_KEY.to_string(), "us-west-2".to_string()),
            ]),
            ints: HashMap::from([
                (CONNECT_TIMEOUT_MS_KEY.to_string(), 9000),
                (REQUEST_TIMEOUT_MS_KEY.to_string(), 9000),
            ]),
        }
    }
}

impl ParameterSource for TestParameterSource {
    fn read_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn read_int(&self, key: &str) -> Option<i64> {
        self.ints.get(key).copied()
    }
}

/// Transport client returning a canned outcome, as the remote service would.
struct MockLexClient {
    succeed: bool,
}

impl MockLexClient {
    fn success_result() -> PostContentResult {
        let slot_json =
            r#"{"test_slots_key1": "test_slots_value1", "test_slots_key2": "test_slots_value2"}"#;
        PostContentResult {
            content_type: "test_content_type".to_string(),
            intent_name: "test_intent_name".to_string(),
            slots: BASE64_STANDARD.encode(slot_json),
            session_attributes: "test_session_attributes".to_string(),
            message: "test_message".to_string(),
            message_format: MessageFormat::CustomPayload,
            dialog_state: DialogState::Failed,
            slot_to_elicit: "test_active_slot".to_string(),
            audio: b"blah blah blah".to_vec(),
        }
    }
}

#[async_trait]
impl ConversationClient for MockLexClient {
    async fn post_content(
        &self,
        _request: &PostContentRequest,
    ) -> anyhow::Result<PostContentResult> {
        if self.succeed {
            Ok(Self::success_result())
        } else {
            anyhow::bail!("remote error outcome")
        }
    }
}

fn test_request() -> TurnRequest {
    TurnRequest::text("make a reservation")
        .with_content_type("text/plain; charset=utf-8")
        .with_accept_type("text/plain; charset=utf-8")
}

fn build_node(succeed: bool) -> LexNode {
    let params = TestParameterSource::new("test_user", "test_bot", "superbot");
    let client: Arc<dyn ConversationClient> = Arc::new(MockLexClient { succeed });
    let Ok(node) = LexNode::build(&params, Some(client)) else {
        panic!("expected node to build");
    };
    node
}

/// Building a node from an empty parameter source must fail with a
/// configuration error before any session is constructed.
#[test]
fn build_node_with_empty_params() {
    let client: Arc<dyn ConversationClient> = Arc::new(MockLexClient { succeed: true });
    let result = LexNode::build(&TestParameterSource::empty(), Some(client));

    assert!(matches!(result, Err(ErrorCode::InvalidLexConfiguration)));
}

/// Initializing a node without an interactor must fail with an argument
/// error.
#[test]
fn build_node_with_null_interactor() {
    let result = LexNode::init(None);
    assert!(matches!(result, Err(ErrorCode::InvalidArgument)));
}

/// Building a node without a transport client must fail with an argument
/// error, after configuration validation passed.
#[test]
fn build_node_without_client() {
    let params = TestParameterSource::new("test_user", "test_bot", "superbot");
    let result = LexNode::build(&params, None);

    assert!(matches!(result, Err(ErrorCode::InvalidArgument)));
}

/// A failing remote call returns false and leaves the response untouched.
#[tokio::test]
async fn post_content_failure_leaves_response_empty() {
    let node = build_node(false);

    let mut response = TurnResponse::default();
    let success = node.handle_turn(&test_request(), &mut response).await;

    assert!(!success);
    assert!(response.text_response.is_empty());
    assert!(response.audio_response.is_empty());
    assert!(response.slots.is_empty());
    assert!(response.intent_name.is_empty());
    assert!(response.message_format_type.is_empty());
    assert!(response.dialog_state.is_empty());
}

/// A successful turn fills every field from the decoded result.
#[tokio::test]
async fn post_content_success_fills_response() {
    let node = build_node(true);

    let mut response = TurnResponse::default();
    let success = node.handle_turn(&test_request(), &mut response).await;

    assert!(success);
    assert_eq!(response.text_response, "test_message");
    assert!(response.audio_response.starts_with(b"blah blah blah"));
    assert_eq!(response.slots.len(), 2);
    assert_eq!(response.slots[0].key, "test_slots_key1");
    assert_eq!(response.slots[0].value, "test_slots_value1");
    assert_eq!(response.slots[1].key, "test_slots_key2");
    assert_eq!(response.slots[1].value, "test_slots_value2");
    assert_eq!(response.intent_name, "test_intent_name");
    assert_eq!(response.message_format_type, "CustomPayload");
    assert_eq!(response.dialog_state, "Failed");
}

/// The per-call client substitution reaches the remote through the supplied
/// client while the stored one stays unused.
#[tokio::test]
async fn handle_turn_with_substituted_client() {
    let node = build_node(false);
    let substitute: Arc<dyn ConversationClient> = Arc::new(MockLexClient { succeed: true });

    let mut response = TurnResponse::default();
    let success = node
        .handle_turn_with(&test_request(), &substitute, &mut response)
        .await;

    assert!(success);
    assert_eq!(response.text_response, "test_message");
}

/// Client that parks inside the remote call until released and records how
/// many callers were ever inside it at once.
struct ParkedLexClient {
    entered: Notify,
    release: Notify,
    concurrent: AtomicUsize,
    max_concurrent: AtomicUsize,
}

impl ParkedLexClient {
    fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            concurrent: AtomicUsize::new(0),
            max_concurrent: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ConversationClient for ParkedLexClient {
    async fn post_content(
        &self,
        _request: &PostContentRequest,
    ) -> anyhow::Result<PostContentResult> {
        let now = self.concurrent.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent.fetch_max(now, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        self.concurrent.fetch_sub(1, Ordering::SeqCst);
        Ok(MockLexClient::success_result())
    }
}

/// Two turns issued without awaiting the first's completion never reach the
/// remote client simultaneously: the second fails fast and the first still
/// completes with a full response.
#[tokio::test]
async fn concurrent_turns_never_interleave() {
    let params = TestParameterSource::new("test_user", "test_bot", "superbot");
    let client = Arc::new(ParkedLexClient::new());
    let as_client: Arc<dyn ConversationClient> = client.clone();
    let Ok(node) = LexNode::build(&params, Some(as_client)) else {
        panic!("expected node to build");
    };
    let node = Arc::new(node);

    let first = {
        let node = Arc::clone(&node);
        tokio::spawn(async move {
            let mut response = TurnResponse::default();
            let success = node.handle_turn(&test_request(), &mut response).await;
            (success, response)
        })
    };

    // Park the first turn inside the remote call, then try a second.
    client.entered.notified().await;

    let mut second_response = TurnResponse::default();
    let second = node.handle_turn(&test_request(), &mut second_response).await;
    assert!(!second);
    assert!(second_response.text_response.is_empty());
    assert!(second_response.slots.is_empty());

    client.release.notify_one();
    let Ok((first_success, first_response)) = first.await else {
        panic!("first turn task panicked");
    };
    assert!(first_success);
    assert_eq!(first_response.text_response, "test_message");

    assert_eq!(client.max_concurrent.load(Ordering::SeqCst), 1);
}

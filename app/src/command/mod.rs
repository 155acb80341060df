//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, enabling
//! compile-time dispatch; no boxed trait objects are involved.

use std::sync::Arc;

use lexrs_config::{FileParameterSource, build_configuration};
use lexrs_conversation::LexInteractor;
use lexrs_core::ConversationClient;
use lexrs_node::LexNode;
use lexrs_providers::LexRuntimeClient;
use tracing::info;

mod chat;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type, enabling type-safe parameter
/// passing without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build the conversation node from the file-backed parameter source.
///
/// This is the full build sequence: parameter source → validated
/// configuration → runtime client with the configured timeouts → interactor
/// → node.
fn build_node() -> anyhow::Result<LexNode> {
    let params = FileParameterSource::load()?;
    info!("Loaded parameters from ~/lexrs/config.json");

    let configuration = build_configuration(&params)?;
    let client: Arc<dyn ConversationClient> = Arc::new(LexRuntimeClient::new(&configuration)?);
    let interactor = LexInteractor::new(configuration, client)?;

    Ok(LexNode::init(Some(interactor))?)
}

//! Conversation command against the configured bot.
//!
//! Posts a single turn with `-m`, or keeps a turn-by-turn interactive loop
//! on stdin. The remote service tracks the dialog state between turns, so
//! slot elicitation carries across the loop.

use std::io::Write;
use std::path::{Path, PathBuf};

use lexrs_core::{TurnRequest, TurnResponse};
use lexrs_node::LexNode;
use tracing::{debug, info};

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional file to write the audio response into
    pub audio_out: Option<PathBuf>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let node = super::build_node()?;

        if let Some(message) = input.message {
            post_and_print(&node, &message, input.audio_out.as_deref()).await?;
        } else {
            run_interactive(&node, input.audio_out.as_deref()).await?;
        }

        Ok(())
    }
}

async fn post_and_print(
    node: &LexNode,
    utterance: &str,
    audio_out: Option<&Path>,
) -> anyhow::Result<()> {
    let request = TurnRequest::text(utterance);
    let mut response = TurnResponse::default();

    if !node.handle_turn(&request, &mut response).await {
        anyhow::bail!("conversation turn failed; see the log for the error code");
    }

    println!("{}", response.text_response);

    info!(
        "Intent: {}, dialog state: {}",
        response.intent_name, response.dialog_state
    );
    if !response.slot_to_elicit.is_empty() {
        info!("Eliciting slot: {}", response.slot_to_elicit);
    }
    for slot in &response.slots {
        debug!("Slot {} = {}", slot.key, slot.value);
    }

    if let Some(path) = audio_out {
        if response.audio_response.is_empty() {
            info!("No audio in the response, nothing written");
        } else {
            std::fs::write(path, &response.audio_response)?;
            info!(
                "Wrote {} audio bytes to {}",
                response.audio_response.len(),
                path.display()
            );
        }
    }

    Ok(())
}

async fn run_interactive(node: &LexNode, audio_out: Option<&Path>) -> anyhow::Result<()> {
    println!("lexrs chat started. Type 'exit' to quit.\n");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if matches!(input, "exit" | "quit" | "q") {
            break;
        }

        if input.is_empty() {
            continue;
        }

        if let Err(e) = post_and_print(node, input, audio_out).await {
            eprintln!("Error: {e}");
        }
        println!();
    }

    Ok(())
}

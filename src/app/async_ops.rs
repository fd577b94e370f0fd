//! Async Operations
//!
//! Background task processing for completion-service requests. The UI
//! thread never blocks on the network: requests go over a channel to a
//! loop running on the tokio runtime, and results are polled back in
//! the frame update.
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────┐
//! │    UI Thread     │          │  Background Task │
//! │   (SecLearnApp)  │          │ (async_ops loop) │
//! │                  │          │                  │
//! │  async_tx ─────────────────▶│  request_rx      │
//! │                  │          │                  │
//! │  async_rx ◀─────────────────│  result_tx       │
//! └──────────────────┘          └──────────────────┘
//! ```
//!
//! The panel disables sending while a request is outstanding, so at
//! most one ask is in flight and replies can never arrive out of order.

use tokio::sync::mpsc;

use crate::chat::{ChatClient, LessonContext};
use crate::models::ChatMessage;

/// Async operation request sent from UI to background task
#[derive(Debug)]
pub(crate) enum AsyncRequest {
    /// Ask the study assistant one question
    AskAssistant {
        question: String,
        context: LessonContext,
        prior: Vec<ChatMessage>,
    },
}

/// Async operation result sent from background task to UI
#[derive(Debug, Clone)]
pub(crate) enum AsyncResult {
    /// The assistant replied
    AssistantReply(String),
    /// The request failed; the UI substitutes the fallback message
    AssistantFailed(String),
}

/// Run the async operation processing loop
///
/// Runs for the lifetime of the application; exits when the UI side
/// drops its sender.
pub(crate) async fn async_operation_loop(
    mut request_rx: mpsc::UnboundedReceiver<AsyncRequest>,
    result_tx: mpsc::UnboundedSender<AsyncResult>,
    client: ChatClient,
) {
    info!("starting async operation loop");

    while let Some(request) = request_rx.recv().await {
        match request {
            AsyncRequest::AskAssistant {
                question,
                context,
                prior,
            } => {
                debug!("processing assistant request ({} chars)", question.len());
                let result = match client.ask(&question, &prior, &context).await {
                    Ok(reply) => AsyncResult::AssistantReply(reply),
                    Err(e) => {
                        warn!("assistant request failed: {}", e);
                        AsyncResult::AssistantFailed(e.to_string())
                    }
                };
                if result_tx.send(result).is_err() {
                    // UI gone; shut the loop down
                    break;
                }
            }
        }
    }

    info!("async operation loop stopped");
}

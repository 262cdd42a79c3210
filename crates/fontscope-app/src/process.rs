//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use std::sync::Arc;

use fontscope_client::AnalysisService;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    tasks: &mut Vec<JoinHandle<()>>,
) where
    S: AnalysisService + Sync + 'static,
{
    // Forget tasks that have already resolved
    tasks.retain(|task| !task.is_finished());

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            tasks.push(handle_action(action, msg_tx.clone(), service.clone()));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

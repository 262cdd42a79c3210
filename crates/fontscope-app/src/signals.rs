//! OS signal handling
//!
//! SIGINT and SIGTERM (Ctrl+C on Windows) become [`Message::Quit`]. Quit
//! never asks for confirmation, so a signal ends the run even while an
//! upload is outstanding.

use fontscope_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Spawn a task that forwards the first termination signal as a quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine gone before {} could be delivered", name);
                }
            }
            Err(e) => error!("Signal handler unavailable: {}", e),
        }
    });
}

/// Resolve with the name of the first termination signal
#[cfg(unix)]
async fn next_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn next_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }
}

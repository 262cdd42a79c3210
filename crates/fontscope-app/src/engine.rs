//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, the analysis service and the
//! background request tasks.

use std::path::PathBuf;
use std::sync::Arc;

use fontscope_client::{AnalysisService, HttpAnalysisClient};
use fontscope_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for fontscope.
///
/// Shared by the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - The injected analysis service
/// - Request task tracking
/// - Settings
pub struct Engine<S = HttpAnalysisClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    service: Arc<S>,

    /// Outstanding analysis tasks
    tasks: Vec<JoinHandle<()>>,
}

impl Engine<HttpAnalysisClient> {
    /// Create an engine talking to the HTTP analysis service described by
    /// `settings`.
    ///
    /// Fails with [`Error::ConfigInvalid`] if the base URL is unusable.
    pub fn new(settings: Settings) -> Result<Self> {
        let config = settings.client_config()?;
        info!("Analysis service: {}", config.base_url());
        let client = HttpAnalysisClient::new(config)
            .map_err(|e| Error::config_invalid(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_service(settings, client))
    }
}

impl<S> Engine<S>
where
    S: AnalysisService + Sync + 'static,
{
    /// Create an engine around an existing analysis service.
    ///
    /// Must be called inside a tokio runtime: the OS signal handler is
    /// spawned here.
    pub fn with_service(settings: Settings, service: S) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            service: Arc::new(service),
            tasks: Vec::new(),
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.service,
            &mut self.tasks,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Offer a path to the file intake, as if it had been dropped
    pub fn select_path(&mut self, path: PathBuf) {
        self.process_message(Message::FilesDropped { paths: vec![path] });
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of request tasks still running
    pub fn active_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }

    /// Abort outstanding requests. Their results would be discarded anyway.
    pub async fn shutdown(&mut self) {
        let tasks = std::mem::take(&mut self.tasks);
        for task in &tasks {
            task.abort();
        }
        for task in tasks {
            let _ = task.await;
        }
        debug!("Engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscope_client::test_utils::{FakeAnalysisService, FakeResponse};
    use fontscope_core::{AnalysisBody, AnalysisVariant};
    use serde_json::json;
    use std::time::Duration;

    async fn run_until_idle<S>(engine: &mut Engine<S>)
    where
        S: AnalysisService + Sync + 'static,
    {
        while engine.state.session.is_in_flight() {
            let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
                .await
                .expect("analysis did not resolve")
                .expect("channel closed");
            engine.process_message(msg);
        }
    }

    fn pdf_in(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".into();

        let result = Engine::new(settings);

        assert!(matches!(result, Err(Error::ConfigInvalid { .. })));
    }

    #[tokio::test]
    async fn test_end_to_end_analysis_with_fake_service() {
        let service = FakeAnalysisService::new()
            .with_progress_steps(&[40, 100])
            .respond_json(json!({
                "filename": "doc.pdf",
                "font_analysis": [{"name": "Arial", "size": 12, "page": 1}]
            }));
        let mut engine = Engine::with_service(Settings::default(), service.clone());
        let dir = tempfile::tempdir().unwrap();

        engine.select_path(pdf_in(&dir, "doc.pdf"));
        engine.process_message(Message::Analyze {
            variant: AnalysisVariant::Detailed,
        });
        assert!(engine.state.session.is_in_flight());

        run_until_idle(&mut engine).await;

        assert_eq!(engine.state.session.upload_progress(), 100);
        let result = engine.state.session.analysis_result().unwrap();
        assert!(matches!(result.body, AnalysisBody::FlatFonts { .. }));
        assert_eq!(service.calls()[0].variant, AnalysisVariant::Detailed);
    }

    #[tokio::test]
    async fn test_failure_message_reaches_state() {
        let service = FakeAnalysisService::new().respond(FakeResponse::Status {
            status: 500,
            error: None,
        });
        let mut engine = Engine::with_service(Settings::default(), service);
        let dir = tempfile::tempdir().unwrap();

        engine.select_path(pdf_in(&dir, "doc.pdf"));
        engine.process_message(Message::Analyze {
            variant: AnalysisVariant::Basic,
        });
        run_until_idle(&mut engine).await;

        assert_eq!(
            engine.state.session.last_error(),
            Some("Failed to analyze PDF. Please try again.")
        );
        assert!(engine.state.session.analysis_result().is_none());
    }

    #[tokio::test]
    async fn test_result_for_cleared_selection_is_discarded() {
        let service = FakeAnalysisService::new().respond_json(json!({"font_analysis": []}));
        let mut engine = Engine::with_service(Settings::default(), service);
        let dir = tempfile::tempdir().unwrap();

        engine.select_path(pdf_in(&dir, "doc.pdf"));
        engine.process_message(Message::Analyze {
            variant: AnalysisVariant::Basic,
        });
        engine.process_message(Message::ClearSelection);
        run_until_idle(&mut engine).await;

        assert!(engine.state.session.analysis_result().is_none());
        assert!(engine.state.session.selected_file().is_none());
    }

    #[tokio::test]
    async fn test_shutdown_clears_tasks() {
        let service = FakeAnalysisService::new().respond_json(json!({"font_analysis": []}));
        let mut engine = Engine::with_service(Settings::default(), service);
        let dir = tempfile::tempdir().unwrap();
        engine.select_path(pdf_in(&dir, "doc.pdf"));
        engine.process_message(Message::AnalyzeSelected);

        engine.shutdown().await;

        assert_eq!(engine.active_tasks(), 0);
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = Engine::with_service(Settings::default(), FakeAnalysisService::new());
        engine.msg_sender().send(Message::NextVariant).await.unwrap();
        engine.msg_sender().send(Message::NextVariant).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert_eq!(engine.state.selected_variant, AnalysisVariant::Advanced);
    }
}

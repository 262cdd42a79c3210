//! Headless mode runner - one analysis without the TUI
//!
//! Selects a file, submits one variant and reports every step of the
//! request lifecycle as a [`HeadlessEvent`].

use std::path::PathBuf;

use tracing::info;

use fontscope_app::{message::Message, state::AppState, Engine};
use fontscope_client::AnalysisService;
use fontscope_core::{prelude::*, render_report, AnalysisVariant};

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Completed,
    /// The file was rejected, the submit was refused or the request failed
    Failed,
    /// Quit (e.g. SIGINT) before the request resolved
    Interrupted,
}

impl HeadlessOutcome {
    pub fn is_success(self) -> bool {
        self == HeadlessOutcome::Completed
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S>(
    mut engine: Engine<S>,
    path: PathBuf,
    variant: AnalysisVariant,
) -> Result<HeadlessOutcome>
where
    S: AnalysisService + Sync + 'static,
{
    info!("fontscope starting in HEADLESS mode");
    info!("File: {}, variant: {}", path.display(), variant);

    let result = drive(&mut engine, path, variant, |event| event.emit()).await;

    // Shutdown
    engine.shutdown().await;

    info!("fontscope headless mode exiting");
    result
}

/// Select, submit and wait for the resolution, handing each event to `emit`
async fn drive<S, F>(
    engine: &mut Engine<S>,
    path: PathBuf,
    variant: AnalysisVariant,
    mut emit: F,
) -> Result<HeadlessOutcome>
where
    S: AnalysisService + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    engine.select_path(path);
    let Some(selected) = engine.state.session.selected_file() else {
        emit(rejection(&engine.state));
        return Ok(HeadlessOutcome::Failed);
    };
    emit(HeadlessEvent::file_selected(&selected.candidate));

    engine.process_message(Message::Analyze { variant });
    if !engine.state.session.is_in_flight() {
        emit(rejection(&engine.state));
        return Ok(HeadlessOutcome::Failed);
    }
    emit(HeadlessEvent::analysis_started(variant));

    let mut last_percent = None;

    // Main event loop
    while engine.state.session.is_in_flight() {
        if engine.should_quit() {
            info!("Quit requested");
            return Ok(HeadlessOutcome::Interrupted);
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            // Channel closed
            return Err(Error::ChannelClosed);
        };

        engine.process_message(msg);

        // Emit events based on state changes after processing
        let percent = engine.state.session.upload_progress();
        if engine.state.session.is_in_flight() && last_percent != Some(percent) {
            last_percent = Some(percent);
            emit(HeadlessEvent::upload_progress(percent));
        }
    }

    if engine.should_quit() {
        return Ok(HeadlessOutcome::Interrupted);
    }

    emit_resolution(&engine.state, variant, &mut emit)
}

/// Report how the request resolved
fn emit_resolution<F>(
    state: &AppState,
    variant: AnalysisVariant,
    emit: &mut F,
) -> Result<HeadlessOutcome>
where
    F: FnMut(HeadlessEvent),
{
    let session = &state.session;
    if let Some(message) = session.last_error() {
        emit(HeadlessEvent::analysis_failed(variant, message.to_string()));
        return Ok(HeadlessOutcome::Failed);
    }

    let report = render_report(session.analysis_result());
    emit(HeadlessEvent::analysis_completed(variant, report));
    Ok(HeadlessOutcome::Completed)
}

/// The message shown for a refused selection or submit
fn rejection(state: &AppState) -> HeadlessEvent {
    let message = state
        .session
        .last_error()
        .unwrap_or("Nothing to analyze")
        .to_string();
    HeadlessEvent::error(message, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscope_app::Settings;
    use fontscope_client::test_utils::{FakeAnalysisService, FakeResponse};
    use serde_json::json;
    use tempfile::TempDir;

    fn pdf(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        path
    }

    async fn run(
        service: FakeAnalysisService,
        path: PathBuf,
        variant: AnalysisVariant,
    ) -> (HeadlessOutcome, Vec<HeadlessEvent>) {
        let mut engine = Engine::with_service(Settings::default(), service);
        let mut events = Vec::new();
        let outcome = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            drive(&mut engine, path, variant, |e| events.push(e)),
        )
        .await
        .expect("headless run did not finish")
        .unwrap();
        engine.shutdown().await;
        (outcome, events)
    }

    #[tokio::test]
    async fn test_successful_run_emits_lifecycle() {
        let dir = TempDir::new().unwrap();
        let service = FakeAnalysisService::new()
            .with_progress_steps(&[50, 100])
            .respond_json(json!({
                "filename": "doc.pdf",
                "font_analysis": [{"name": "Arial", "size": 12, "page": 1}]
            }));

        let (outcome, events) = run(service, pdf(&dir, "doc.pdf"), AnalysisVariant::Basic).await;

        assert_eq!(outcome, HeadlessOutcome::Completed);
        assert!(matches!(&events[0], HeadlessEvent::FileSelected { name, .. } if name == "doc.pdf"));
        assert!(matches!(
            events[1],
            HeadlessEvent::AnalysisStarted {
                variant: AnalysisVariant::Basic,
                ..
            }
        ));
        assert!(events
            .iter()
            .any(|e| matches!(e, HeadlessEvent::UploadProgress { percent: 50, .. })));
        match events.last() {
            Some(HeadlessEvent::AnalysisCompleted {
                report: Some(report),
                ..
            }) => assert_eq!(report.filename.as_deref(), Some("doc.pdf")),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_file_fails_without_request() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let service = FakeAnalysisService::new();

        let (outcome, events) = run(service.clone(), path, AnalysisVariant::Basic).await;

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            HeadlessEvent::Error { message, fatal: true, .. } if message == "Please upload a PDF file"
        ));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let service = FakeAnalysisService::new().respond(FakeResponse::Status {
            status: 422,
            error: Some("Encrypted PDF".into()),
        });

        let (outcome, events) = run(service, pdf(&dir, "locked.pdf"), AnalysisVariant::Ocr).await;

        assert_eq!(outcome, HeadlessOutcome::Failed);
        assert!(matches!(
            events.last(),
            Some(HeadlessEvent::AnalysisFailed { variant: AnalysisVariant::Ocr, message, .. })
                if message == "Encrypted PDF"
        ));
    }

    #[test]
    fn test_outcome_success() {
        assert!(HeadlessOutcome::Completed.is_success());
        assert!(!HeadlessOutcome::Failed.is_success());
        assert!(!HeadlessOutcome::Interrupted.is_success());
    }
}

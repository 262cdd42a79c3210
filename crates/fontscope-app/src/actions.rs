//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use fontscope_client::{AnalysisService, ProgressCallback};
use fontscope_core::AnalysisResult;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::session::RequestTicket;

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> JoinHandle<()>
where
    S: AnalysisService + Sync + 'static,
{
    match action {
        UpdateAction::RunAnalysis(ticket) => {
            tokio::spawn(async move { run_analysis(ticket, msg_tx, service).await })
        }
    }
}

/// Upload one file and report the outcome, tagged with the ticket's generation
async fn run_analysis<S>(ticket: RequestTicket, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: AnalysisService + Sync,
{
    let RequestTicket {
        generation,
        file,
        variant,
    } = ticket;

    let progress_tx = msg_tx.clone();
    let progress: ProgressCallback = Arc::new(move |percent| {
        // Progress is monotonic, so a report dropped on a full channel is
        // superseded by the next one
        let _ = progress_tx.try_send(Message::UploadProgress {
            generation,
            percent,
        });
    });

    let message = match service.analyze(&file, variant, progress).await {
        Ok(body) => {
            debug!("{} response for {} received", variant, file.name);
            Message::AnalysisCompleted {
                generation,
                variant,
                result: AnalysisResult::from_value(&body),
            }
        }
        Err(e) => {
            warn!("{} request for {} failed: {}", variant, file.name, e);
            Message::AnalysisFailed {
                generation,
                variant,
                message: e.user_message(variant),
            }
        }
    };

    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed before {} resolved", variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscope_client::test_utils::{FakeAnalysisService, FakeResponse};
    use fontscope_core::{AnalysisBody, AnalysisVariant, FileCandidate};
    use serde_json::json;
    use std::path::PathBuf;

    fn ticket(variant: AnalysisVariant) -> RequestTicket {
        RequestTicket {
            generation: 7,
            file: FileCandidate {
                path: PathBuf::from("/tmp/doc.pdf"),
                name: "doc.pdf".into(),
                media_type: "application/pdf".into(),
                size: 100,
            },
            variant,
        }
    }

    async fn collect(mut rx: mpsc::Receiver<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_success_reports_progress_then_classified_result() {
        let service = Arc::new(
            FakeAnalysisService::new()
                .with_progress_steps(&[25, 100])
                .respond_json(json!({"filename": "doc.pdf", "font_analysis": []})),
        );
        let (tx, rx) = mpsc::channel(16);

        handle_action(
            UpdateAction::RunAnalysis(ticket(AnalysisVariant::Basic)),
            tx,
            service.clone(),
        )
        .await
        .unwrap();
        let messages = collect(rx).await;

        assert!(matches!(
            messages[0],
            Message::UploadProgress {
                generation: 7,
                percent: 25
            }
        ));
        assert!(matches!(
            messages[1],
            Message::UploadProgress {
                generation: 7,
                percent: 100
            }
        ));
        match &messages[2] {
            Message::AnalysisCompleted {
                generation,
                variant,
                result,
            } => {
                assert_eq!(*generation, 7);
                assert_eq!(*variant, AnalysisVariant::Basic);
                assert_eq!(result.filename.as_deref(), Some("doc.pdf"));
                assert!(matches!(result.body, AnalysisBody::FlatFonts { .. }));
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(service.calls().len(), 1);
        assert_eq!(service.calls()[0].file_name, "doc.pdf");
    }

    #[tokio::test]
    async fn test_backend_error_string_becomes_failure_message() {
        let service = Arc::new(FakeAnalysisService::new().respond(FakeResponse::Status {
            status: 400,
            error: Some("Invalid PDF structure".into()),
        }));
        let (tx, rx) = mpsc::channel(16);

        handle_action(
            UpdateAction::RunAnalysis(ticket(AnalysisVariant::Advanced)),
            tx,
            service,
        )
        .await
        .unwrap();
        let messages = collect(rx).await;

        match messages.last() {
            Some(Message::AnalysisFailed { message, .. }) => {
                assert_eq!(message, "Invalid PDF structure");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ocr_failure_uses_ocr_fallback() {
        let service = Arc::new(FakeAnalysisService::new().respond(FakeResponse::Unreadable));
        let (tx, rx) = mpsc::channel(16);

        handle_action(
            UpdateAction::RunAnalysis(ticket(AnalysisVariant::Ocr)),
            tx,
            service,
        )
        .await
        .unwrap();
        let messages = collect(rx).await;

        match messages.last() {
            Some(Message::AnalysisFailed {
                message, variant, ..
            }) => {
                assert_eq!(*variant, AnalysisVariant::Ocr);
                assert_eq!(message, "Failed to perform OCR analysis. Please try again.");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}

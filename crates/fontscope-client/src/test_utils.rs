//! Test utilities for code that depends on an analysis service
//!
//! Provides a scripted [`FakeAnalysisService`] that answers from a queue of
//! canned responses and records every call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use fontscope_core::{AnalysisVariant, FileCandidate};
use serde_json::Value;

use crate::error::ClientError;
use crate::progress::ProgressCallback;
use crate::service::AnalysisService;

/// A canned outcome for one call
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// 2xx with this JSON body
    Success(Value),
    /// Non-2xx with an optional backend error string
    Status { status: u16, error: Option<String> },
    /// The upload file could not be read
    Unreadable,
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub file_name: String,
    pub variant: AnalysisVariant,
}

/// Scripted analysis service.
///
/// Responses are consumed in order; when the queue is empty every call
/// fails with a 500 and no backend message.
#[derive(Debug, Clone, Default)]
pub struct FakeAnalysisService {
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    progress_steps: Vec<u8>,
}

impl FakeAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn respond(self, response: FakeResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queue a successful JSON body
    pub fn respond_json(self, body: Value) -> Self {
        self.respond(FakeResponse::Success(body))
    }

    /// Percentages reported before each response resolves
    pub fn with_progress_steps(mut self, steps: &[u8]) -> Self {
        self.progress_steps = steps.to_vec();
        self
    }

    /// Calls made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl AnalysisService for FakeAnalysisService {
    async fn analyze(
        &self,
        file: &FileCandidate,
        variant: AnalysisVariant,
        progress: ProgressCallback,
    ) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            file_name: file.name.clone(),
            variant,
        });

        for step in &self.progress_steps {
            progress(*step);
        }

        let response = self.responses.lock().unwrap().pop_front();
        match response {
            Some(FakeResponse::Success(body)) => Ok(body),
            Some(FakeResponse::Status { status, error }) => {
                Err(ClientError::Status { status, error })
            }
            Some(FakeResponse::Unreadable) => Err(ClientError::io(
                &file.path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file vanished"),
            )),
            None => Err(ClientError::Status {
                status: 500,
                error: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn candidate() -> FileCandidate {
        FileCandidate {
            path: PathBuf::from("/tmp/doc.pdf"),
            name: "doc.pdf".into(),
            media_type: "application/pdf".into(),
            size: 10,
        }
    }

    #[tokio::test]
    async fn test_fake_replays_responses_in_order() {
        let fake = FakeAnalysisService::new()
            .respond_json(json!({"font_analysis": []}))
            .respond(FakeResponse::Status {
                status: 400,
                error: Some("bad".into()),
            });
        let noop: ProgressCallback = Arc::new(|_| {});

        let first = fake
            .analyze(&candidate(), AnalysisVariant::Basic, noop.clone())
            .await;
        assert!(first.is_ok());

        let second = fake
            .analyze(&candidate(), AnalysisVariant::Ocr, noop.clone())
            .await;
        assert!(matches!(second, Err(ClientError::Status { status: 400, .. })));

        let third = fake.analyze(&candidate(), AnalysisVariant::Ocr, noop).await;
        assert!(matches!(third, Err(ClientError::Status { status: 500, .. })));

        assert_eq!(fake.calls().len(), 3);
        assert_eq!(fake.calls()[1].variant, AnalysisVariant::Ocr);
    }

    #[test]
    fn test_fake_reports_scripted_progress() {
        let fake = FakeAnalysisService::new()
            .with_progress_steps(&[10, 60, 100])
            .respond_json(json!({}));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let progress: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));

        let result =
            tokio_test::block_on(fake.analyze(&candidate(), AnalysisVariant::Advanced, progress));

        assert!(result.is_ok());
        assert_eq!(*seen.lock().unwrap(), vec![10, 60, 100]);
    }
}

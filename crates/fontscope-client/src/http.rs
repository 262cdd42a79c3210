//! HTTP implementation of the analysis service

use bytes::Bytes;
use fontscope_core::{AnalysisVariant, FileCandidate, PDF_MEDIA_TYPE};
use futures_util::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::progress::{ProgressCallback, ProgressTracker};
use crate::service::AnalysisService;

/// Multipart field carrying the uploaded document
pub const UPLOAD_FIELD: &str = "pdf_file";

/// Talks to the analysis backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    config: ClientConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the multipart form, streaming the file in chunks so progress
    /// follows the bytes handed to the transport.
    async fn upload_form(
        &self,
        file: &FileCandidate,
        progress: ProgressCallback,
    ) -> Result<Form, ClientError> {
        let data = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ClientError::io(&file.path, e))?;
        let data = Bytes::from(data);
        let total = data.len() as u64;

        let chunks = split_chunks(data, self.config.chunk_size);
        let mut tracker = ProgressTracker::new(total, progress);
        let body = stream::iter(chunks.into_iter().map(move |chunk| {
            tracker.advance(chunk.len());
            Ok::<_, std::io::Error>(chunk)
        }));

        let media_type = if file.media_type.is_empty() {
            PDF_MEDIA_TYPE
        } else {
            file.media_type.as_str()
        };

        let part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(file.name.clone())
            .mime_str(media_type)?;

        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(
        &self,
        file: &FileCandidate,
        variant: AnalysisVariant,
        progress: ProgressCallback,
    ) -> Result<Value, ClientError> {
        let url = self.config.endpoint_url(variant);
        info!("Submitting {} ({} bytes) to {}", file.name, file.size, url);

        let form = self.upload_form(file, progress).await?;
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("{} responded {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            let error = backend_error(&body);
            warn!(
                "Analysis request failed with {}: {}",
                status,
                error.as_deref().unwrap_or("<no error message>")
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                error,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// `error` string of a JSON error body
fn backend_error(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

fn split_chunks(data: Bytes, chunk_size: usize) -> Vec<Bytes> {
    let chunk_size = chunk_size.max(1);
    (0..data.len())
        .step_by(chunk_size)
        .map(|start| data.slice(start..(start + chunk_size).min(data.len())))
        .collect()
}

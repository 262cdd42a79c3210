//! The analysis service seam

use fontscope_core::{AnalysisVariant, FileCandidate};
use serde_json::Value;

use crate::error::ClientError;
use crate::progress::ProgressCallback;

/// Submits one file to one analysis endpoint.
///
/// Implementations upload `file`, call `progress` with non-decreasing
/// percentages while the body is sent, and resolve with the decoded JSON
/// document of a 2xx response. There are no retries.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    async fn analyze(
        &self,
        file: &FileCandidate,
        variant: AnalysisVariant,
        progress: ProgressCallback,
    ) -> Result<Value, ClientError>;
}

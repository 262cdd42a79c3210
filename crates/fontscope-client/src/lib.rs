//! fontscope-client - Analysis Client for the fontscope service
//!
//! Uploads a selected PDF to one of the analysis endpoints, reports upload
//! progress through a callback and reduces every failure to a
//! [`ClientError`] with a single user-facing message.
//!
//! The [`AnalysisService`] trait is the seam the application talks to;
//! [`HttpAnalysisClient`] is the production implementation.

pub mod config;
pub mod error;
pub mod http;
pub mod progress;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE};
pub use error::ClientError;
pub use http::{HttpAnalysisClient, UPLOAD_FIELD};
pub use progress::{ProgressCallback, ProgressTracker};
pub use service::{AnalysisService, LocalAnalysisService};

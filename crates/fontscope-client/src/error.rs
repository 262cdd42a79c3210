//! Client error type and failure normalization

use std::path::PathBuf;

use fontscope_core::AnalysisVariant;
use thiserror::Error;

/// Everything that can go wrong between selecting a variant and holding a
/// decoded response
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        /// `error` string from a JSON error body, when present
        error: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Error string supplied by the backend, if the response carried one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                error: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// The single message shown to the user for this failure.
    ///
    /// Prefers the backend's own error string, otherwise the variant's fixed
    /// fallback.
    pub fn user_message(&self, variant: AnalysisVariant) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| variant.failure_message().to_string())
    }

    /// Whether the request gave up waiting on the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_preferred() {
        let err = ClientError::Status {
            status: 400,
            error: Some("No file part".into()),
        };
        assert_eq!(err.user_message(AnalysisVariant::Basic), "No file part");
    }

    #[test]
    fn test_fallback_names_the_variant_action() {
        let err = ClientError::Status {
            status: 500,
            error: None,
        };
        assert_eq!(
            err.user_message(AnalysisVariant::Detailed),
            "Failed to analyze PDF. Please try again."
        );
        assert_eq!(
            err.user_message(AnalysisVariant::Ocr),
            "Failed to perform OCR analysis. Please try again."
        );
    }

    #[test]
    fn test_empty_backend_message_falls_back() {
        let err = ClientError::Status {
            status: 500,
            error: Some(String::new()),
        };
        assert_eq!(
            err.user_message(AnalysisVariant::Basic),
            AnalysisVariant::Basic.failure_message()
        );
    }

    #[test]
    fn test_io_error_uses_fallback() {
        let err = ClientError::io(
            "/tmp/gone.pdf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/gone.pdf"));
        assert_eq!(
            err.user_message(AnalysisVariant::Advanced),
            AnalysisVariant::Advanced.failure_message()
        );
    }
}

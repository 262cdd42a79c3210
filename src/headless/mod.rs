//! Headless mode - JSON event output for scripting
//!
//! Runs one analysis without the TUI and reports each step as structured
//! JSON on stdout, so scripts and tests never parse terminal escape codes.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"file_selected","name":"doc.pdf","size_bytes":52480,"size":"0.05 MB","timestamp":1704700001000}
//! {"event":"analysis_started","variant":"basic","label":"Basic Analysis","timestamp":1704700001002}
//! {"event":"upload_progress","percent":100,"timestamp":1704700001050}
//! {"event":"analysis_completed","variant":"basic","report":{...},"timestamp":1704700001200}
//! ```

pub mod runner;

use chrono::Utc;
use fontscope_core::{AnalysisVariant, FileCandidate, Report};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The file passed validation and is selected
    FileSelected {
        name: String,
        size_bytes: u64,
        size: String,
        timestamp: i64,
    },

    /// The upload request was dispatched
    AnalysisStarted {
        variant: AnalysisVariant,
        label: String,
        timestamp: i64,
    },

    /// Upload progress, 0-100
    UploadProgress { percent: u8, timestamp: i64 },

    /// The backend answered with a result
    AnalysisCompleted {
        variant: AnalysisVariant,
        report: Option<Report>,
        timestamp: i64,
    },

    /// The request failed; `message` is what the TUI would show
    AnalysisFailed {
        variant: AnalysisVariant,
        message: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        // Serialize to JSON
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn file_selected(file: &FileCandidate) -> Self {
        Self::FileSelected {
            name: file.name.clone(),
            size_bytes: file.size,
            size: file.display_size(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_started(variant: AnalysisVariant) -> Self {
        Self::AnalysisStarted {
            variant,
            label: variant.label().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn upload_progress(percent: u8) -> Self {
        Self::UploadProgress {
            percent,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(variant: AnalysisVariant, report: Option<Report>) -> Self {
        Self::AnalysisCompleted {
            variant,
            report,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(variant: AnalysisVariant, message: String) -> Self {
        Self::AnalysisFailed {
            variant,
            message,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

//! Analysis session - the interaction state for one user
//!
//! Owns the selected file, the last result and error, upload progress and
//! the in-flight marker. Every selection change and every submit bumps a
//! generation counter; responses tagged with an older generation are
//! discarded so a slow request can never overwrite newer state.

use fontscope_core::{AnalysisResult, AnalysisVariant, FileCandidate};
use tracing::{debug, info};

use crate::preview::{PreviewHandle, PreviewRegistry, PREVIEW_FAILED};

/// Shown when the first dropped file is not a PDF
pub const INVALID_FILE_MESSAGE: &str = "Please upload a PDF file";

/// Shown when an analysis is requested with nothing selected
pub const NO_FILE_MESSAGE: &str = "Please select a PDF file first";

/// The file staged for analysis, with its preview resource
#[derive(Debug)]
pub struct SelectedFile {
    pub candidate: FileCandidate,
    preview: Option<PreviewHandle>,
    preview_error: Option<String>,
}

impl SelectedFile {
    fn new(candidate: FileCandidate, previews: Option<&PreviewRegistry>) -> Self {
        let (preview, preview_error) = match previews {
            Some(registry) => match registry.acquire(&candidate.path) {
                Ok(handle) => (Some(handle), None),
                Err(e) => {
                    debug!("Preview for {} failed: {}", candidate.name, e);
                    (None, Some(PREVIEW_FAILED.to_string()))
                }
            },
            None => (None, None),
        };

        Self {
            candidate,
            preview,
            preview_error,
        }
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn preview_error(&self) -> Option<&str> {
        self.preview_error.as_deref()
    }
}

/// Result of offering files to the intake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Accepted,
    Rejected,
    /// Nothing was offered
    Ignored,
}

/// Why a submit did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoFile,
    Busy,
}

/// Everything a background task needs to run one request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    pub generation: u64,
    pub file: FileCandidate,
    pub variant: AnalysisVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    generation: u64,
    variant: AnalysisVariant,
}

/// Interaction state of the analysis screen
#[derive(Debug, Default)]
pub struct AnalysisSession {
    selected_file: Option<SelectedFile>,
    analysis_result: Option<AnalysisResult>,
    last_error: Option<String>,
    upload_progress: u8,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn analysis_result(&self) -> Option<&AnalysisResult> {
        self.analysis_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Percentage of the current upload; only meaningful while in flight
    pub fn upload_progress(&self) -> u8 {
        self.upload_progress
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Variant of the outstanding request
    pub fn in_flight_variant(&self) -> Option<AnalysisVariant> {
        self.in_flight.map(|f| f.variant)
    }

    // ─────────────────────────────────────────────────────────
    // File Intake
    // ─────────────────────────────────────────────────────────

    /// Offer an ordered sequence of files; only the first is considered.
    ///
    /// An accepted file replaces the selection (releasing the old preview)
    /// and clears the previous result and error. A rejected file leaves the
    /// selection untouched and sets the invalid-file message.
    pub fn handle_drop(
        &mut self,
        candidates: impl IntoIterator<Item = FileCandidate>,
        previews: Option<&PreviewRegistry>,
    ) -> DropOutcome {
        let Some(candidate) = candidates.into_iter().next() else {
            return DropOutcome::Ignored;
        };

        if !candidate.is_valid_pdf() {
            info!("Rejected {} ({:?})", candidate.name, candidate.media_type);
            self.last_error = Some(INVALID_FILE_MESSAGE.to_string());
            return DropOutcome::Rejected;
        }

        info!("Selected {} ({} bytes)", candidate.name, candidate.size);
        // Release the old preview before opening the new one
        self.selected_file = None;
        self.selected_file = Some(SelectedFile::new(candidate, previews));
        self.analysis_result = None;
        self.last_error = None;
        self.generation += 1;
        DropOutcome::Accepted
    }

    /// Record an error raised outside the validator, e.g. an unreadable path
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Drop the selection, result and error together
    pub fn clear(&mut self) {
        self.selected_file = None;
        self.analysis_result = None;
        self.last_error = None;
        self.generation += 1;
    }

    // ─────────────────────────────────────────────────────────
    // Request lifecycle
    // ─────────────────────────────────────────────────────────

    /// Start a request for the selected file.
    ///
    /// Without a file the no-file message is set. While a request is
    /// outstanding the call is ignored.
    pub fn begin_request(
        &mut self,
        variant: AnalysisVariant,
    ) -> Result<RequestTicket, SubmitRejection> {
        if self.in_flight.is_some() {
            return Err(SubmitRejection::Busy);
        }

        let Some(selected) = &self.selected_file else {
            self.last_error = Some(NO_FILE_MESSAGE.to_string());
            return Err(SubmitRejection::NoFile);
        };
        let file = selected.candidate.clone();

        self.generation += 1;
        self.in_flight = Some(InFlight {
            generation: self.generation,
            variant,
        });
        self.upload_progress = 0;
        self.last_error = None;

        Ok(RequestTicket {
            generation: self.generation,
            file,
            variant,
        })
    }

    /// Apply an upload progress report. Reports never move progress back.
    pub fn apply_progress(&mut self, generation: u64, percent: u8) {
        if self.is_current_request(generation) {
            self.upload_progress = self.upload_progress.max(percent.min(100));
        }
    }

    /// Store a successful result. Returns false if it was discarded as stale.
    pub fn complete(&mut self, generation: u64, result: AnalysisResult) -> bool {
        self.release(generation);
        if generation != self.generation {
            debug!(
                "Discarding stale result (generation {} != {})",
                generation, self.generation
            );
            return false;
        }
        self.analysis_result = Some(result);
        self.last_error = None;
        true
    }

    /// Store a failure message. The previous result stays in place.
    /// Returns false if it was discarded as stale.
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        self.release(generation);
        if generation != self.generation {
            debug!(
                "Discarding stale failure (generation {} != {})",
                generation, self.generation
            );
            return false;
        }
        self.last_error = Some(message.into());
        true
    }

    fn is_current_request(&self, generation: u64) -> bool {
        generation == self.generation
            && self.in_flight.map(|f| f.generation) == Some(generation)
    }

    fn release(&mut self, generation: u64) {
        if self.in_flight.map(|f| f.generation) == Some(generation) {
            self.in_flight = None;
        }
    }
}

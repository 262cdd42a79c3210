//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use fontscope_core::{AnalysisResult, AnalysisVariant};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Text pasted into the terminal (dropped files arrive this way)
    Paste(String),
    /// Tick for periodic updates
    Tick,

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Quit, asking first if an analysis is running
    RequestQuit,
    /// Quit immediately
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // File Intake
    // ─────────────────────────────────────────────────────────
    /// Files offered for selection, in order
    FilesDropped { paths: Vec<PathBuf> },
    /// Remove the selected file, result and error
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Path prompt
    // ─────────────────────────────────────────────────────────
    OpenPathInput,
    PathInputChar(char),
    PathInputBackspace,
    PathInputClear,
    SubmitPathInput,
    CancelPathInput,

    // ─────────────────────────────────────────────────────────
    // Variant selection
    // ─────────────────────────────────────────────────────────
    SelectVariant(AnalysisVariant),
    NextVariant,
    PrevVariant,

    // ─────────────────────────────────────────────────────────
    // Analysis lifecycle
    // ─────────────────────────────────────────────────────────
    /// Submit the selected file for analysis
    Analyze { variant: AnalysisVariant },
    /// Submit with the highlighted variant
    AnalyzeSelected,
    UploadProgress { generation: u64, percent: u8 },
    AnalysisCompleted {
        generation: u64,
        variant: AnalysisVariant,
        result: AnalysisResult,
    },
    AnalysisFailed {
        generation: u64,
        variant: AnalysisVariant,
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Result scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}

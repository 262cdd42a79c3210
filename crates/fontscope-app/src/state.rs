//! Application state (Model in TEA pattern)

use fontscope_core::AnalysisVariant;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::preview::PreviewRegistry;
use crate::result_view::ResultViewState;
use crate::session::AnalysisSession;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Intake, variant bar and results
    #[default]
    Normal,

    /// Typing a file path
    PathInput,

    /// Confirmation dialog (quit while an analysis runs)
    ConfirmDialog,
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    /// Selection, result, error and request lifecycle
    pub session: AnalysisSession,

    /// Tracks preview handles owned by the selection
    pub previews: PreviewRegistry,

    /// Variant highlighted in the action bar
    pub selected_variant: AnalysisVariant,

    /// Text typed into the path prompt
    pub path_input: String,

    pub confirm_dialog_state: Option<ConfirmDialogState>,

    pub result_view: ResultViewState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            selected_variant: settings.upload.default_variant,
            settings,
            session: AnalysisSession::new(),
            previews: PreviewRegistry::new(),
            path_input: String::new(),
            confirm_dialog_state: None,
            result_view: ResultViewState::new(),
        }
    }

    /// Registry to acquire previews from, if previews are enabled
    pub fn preview_registry(&self) -> Option<&PreviewRegistry> {
        self.settings.ui.show_preview.then_some(&self.previews)
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Request quit, asking first while an analysis is running
    pub fn request_quit(&mut self) {
        if self.session.is_in_flight() && self.settings.behavior.confirm_quit {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(
                self.session.in_flight_variant(),
            ));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Path prompt
    // ─────────────────────────────────────────────────────────

    pub fn open_path_input(&mut self) {
        self.path_input.clear();
        self.ui_mode = UiMode::PathInput;
    }

    pub fn close_path_input(&mut self) {
        self.path_input.clear();
        self.ui_mode = UiMode::Normal;
    }
}

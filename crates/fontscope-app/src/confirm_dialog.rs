//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! fontscope-tui.

use fontscope_core::AnalysisVariant;

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Quit confirmation shown while an analysis is running
    pub fn quit_confirmation(running: Option<AnalysisVariant>) -> Self {
        let message = match running {
            Some(variant) => format!("{} is still running.", variant.label()),
            None => "An analysis is still running.".to_string(),
        };
        Self::new(
            "Quit fontscope?",
            message,
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_confirmation_names_running_variant() {
        let dialog = ConfirmDialogState::quit_confirmation(Some(AnalysisVariant::Ocr));
        assert_eq!(dialog.title, "Quit fontscope?");
        assert_eq!(dialog.message, "OCR Analysis is still running.");
        assert_eq!(dialog.options.len(), 2);
        assert!(matches!(dialog.options[0].1, Message::ConfirmQuit));
        assert!(matches!(dialog.options[1].1, Message::CancelQuit));
    }
}

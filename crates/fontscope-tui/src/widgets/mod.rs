//! Custom widget components

mod confirm_dialog;
mod header;
mod intake;
pub mod modal_overlay;
mod path_input;
mod results;
mod status_line;
mod variant_bar;

pub use confirm_dialog::ConfirmDialog;
pub use header::{MainHeader, APP_TITLE};
pub use intake::{IntakePanel, DROP_HINT};
pub use path_input::PathInput;
pub use results::{report_lines, ResultsPanel};
pub use status_line::StatusLine;
pub use variant_bar::{VariantBar, ANALYZING_LABEL};

// Re-export state types from app layer (these are used by render/)
pub use fontscope_app::confirm_dialog::ConfirmDialogState;

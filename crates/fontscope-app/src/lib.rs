//! fontscope-app - Application state and orchestration for fontscope
//!
//! Implements the TEA (The Elm Architecture) pattern: a [`Message`] enum,
//! a pure [`handler::update`] function over [`AppState`], and
//! [`actions::handle_action`] for the background upload. The [`Engine`]
//! ties them to a message channel and an injected analysis service so the
//! TUI and headless runners share one orchestration core.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod paste;
pub mod preview;
pub mod process;
pub mod result_view;
pub mod session;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use preview::{PreviewHandle, PreviewInfo, PreviewRegistry};
pub use session::{AnalysisSession, RequestTicket, SelectedFile};
pub use state::{AppPhase, AppState, UiMode};

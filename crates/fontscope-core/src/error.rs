//! Error types shared by every fontscope crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or teardown
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// A selected path could not be read
    #[error("Unable to open {path}: {reason}")]
    FileUnreadable { path: PathBuf, reason: String },

    /// The config file could not be written or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Settings that cannot be used, e.g. a malformed base URL
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn file_unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }
}

/// Log an error with context on its way up
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}

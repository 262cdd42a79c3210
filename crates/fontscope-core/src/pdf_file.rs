//! User-provided files and the PDF acceptance rule
//!
//! A [`FileCandidate`] carries the same metadata a browser exposes for a
//! dropped file: a display name, a declared media type guessed from the
//! extension, and a byte size. Acceptance is decided purely from that
//! metadata; file contents are never inspected here.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Media type reported for PDF documents
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Metadata for a file the user offered for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCandidate {
    /// Location on disk
    pub path: PathBuf,
    /// Final path component, as shown to the user and sent as the upload file name
    pub name: String,
    /// Declared media type, empty when the extension is unknown
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileCandidate {
    /// Build a candidate from a path on disk.
    ///
    /// Fails when the path does not exist, cannot be stat'ed, or is a
    /// directory. The media type is guessed from the extension only.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::file_unreadable(path, e.to_string()))?;

        if metadata.is_dir() {
            return Err(Error::file_unreadable(path, "is a directory"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            media_type,
            size: metadata.len(),
        })
    }

    /// Whether this candidate passes [`is_valid_pdf`]
    pub fn is_valid_pdf(&self) -> bool {
        is_valid_pdf(&self.media_type, &self.name)
    }

    /// Size rendered for display, e.g. `"1.50 MB"`
    pub fn display_size(&self) -> String {
        format!("{} MB", format_file_size(self.size))
    }
}

/// Decide whether a file is an acceptable PDF.
///
/// Accepted iff the declared media type is exactly `application/pdf`, or the
/// name ends with `.pdf` in any letter case.
pub fn is_valid_pdf(media_type: &str, name: &str) -> bool {
    media_type == PDF_MEDIA_TYPE || name.to_lowercase().ends_with(".pdf")
}

/// Format a byte count as megabytes with two decimals (no unit suffix)
pub fn format_file_size(size_in_bytes: u64) -> String {
    let size_in_mb = size_in_bytes as f64 / (1024.0 * 1024.0);
    format!("{:.2}", size_in_mb)
}

/// Parse the `%PDF-x.y` version marker from the first bytes of a file.
///
/// Returns `None` when the marker is absent, which is common for files that
/// only carry a `.pdf` name.
pub fn parse_pdf_version(header: &[u8]) -> Option<String> {
    let rest = header.strip_prefix(b"%PDF-")?;
    let version: String = rest
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .map(|b| *b as char)
        .collect();

    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

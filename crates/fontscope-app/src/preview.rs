//! Preview resources for the selected file
//!
//! Selecting a file opens it and reads its header so the intake panel can
//! show what was picked. The open handle is owned by the selection and
//! released on drop; the registry counts handles that are still open.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fontscope_core::pdf_file::parse_pdf_version;
use fontscope_core::prelude::*;

/// Bytes read from the start of the file
const HEADER_LEN: usize = 1024;

/// Message shown when a preview cannot be created
pub const PREVIEW_FAILED: &str = "Failed to create PDF preview";

/// Counts live [`PreviewHandle`]s
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    open: Arc<AtomicUsize>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles not yet released
    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Open `path` and read its header
    pub fn acquire(&self, path: &Path) -> Result<PreviewHandle> {
        let mut file = File::open(path)?;
        let mut header = vec![0u8; HEADER_LEN];
        let read = read_up_to(&mut file, &mut header)?;
        header.truncate(read);

        self.open.fetch_add(1, Ordering::SeqCst);
        debug!("Opened preview for {}", path.display());

        Ok(PreviewHandle {
            path: path.to_path_buf(),
            info: PreviewInfo {
                pdf_version: parse_pdf_version(&header),
            },
            _file: file,
            open: self.open.clone(),
        })
    }
}

/// What the preview shows about a file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewInfo {
    /// Version from the `%PDF-x.y` marker, if the file has one
    pub pdf_version: Option<String>,
}

impl PreviewInfo {
    pub fn summary(&self) -> String {
        match &self.pdf_version {
            Some(version) => format!("PDF {}", version),
            None => "No PDF header found".to_string(),
        }
    }
}

/// An open preview. Released exactly once, when dropped.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
    info: PreviewInfo,
    _file: File,
    open: Arc<AtomicUsize>,
}

impl PreviewHandle {
    pub fn info(&self) -> &PreviewInfo {
        &self.info
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
        debug!("Released preview for {}", self.path.display());
    }
}

fn read_up_to(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

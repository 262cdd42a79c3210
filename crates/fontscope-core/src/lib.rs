//! # fontscope-core - Core Domain Types
//!
//! Foundation crate for fontscope. Provides the file validator, the analysis
//! result model, the report renderer, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, mime_guess).
//!
//! ## Public API
//!
//! ### Files (`pdf_file`)
//! - [`FileCandidate`] - Metadata for a user-provided file
//! - [`is_valid_pdf()`] - The acceptance predicate for uploads
//! - [`format_file_size()`] - Megabyte display string for a byte count
//!
//! ### Analysis (`analysis`)
//! - [`AnalysisVariant`] - The four backend analysis modes
//! - [`AnalysisResult`] - A decoded response, classified by shape into [`AnalysisBody`]
//!
//! ### Reports (`report`)
//! - [`render_report()`] - Maps an optional result to a display-ready [`Report`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use fontscope_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod format;
pub mod logging;
pub mod pdf_file;
pub mod prelude;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    AnalysisBody, AnalysisResult, AnalysisVariant, FontDescriptor, FontUsage, OcrPage, PageFont,
    PageFonts, PlacedFont, Scalar, StructuredFonts,
};
pub use error::{Error, Result, ResultExt};
pub use format::{format_color, format_page_name};
pub use pdf_file::{format_file_size, is_valid_pdf, FileCandidate, PDF_MEDIA_TYPE};
pub use report::{render_report, Report, ReportBlock, ReportSection};

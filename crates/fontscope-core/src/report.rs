//! Result Renderer
//!
//! Maps an optional [`AnalysisResult`] to a display-ready [`Report`]: a title,
//! the analyzed file name and a list of sections made of typed blocks. The
//! TUI turns blocks into styled lines; headless mode serializes the report
//! as-is.

use serde::Serialize;

use crate::analysis::{AnalysisBody, AnalysisResult, OcrPage, PlacedFont, StructuredFonts};
use crate::format::{format_color, format_page_name};

/// Title for OCR results
pub const OCR_TITLE: &str = "OCR Text Extraction Results";
/// Title for every font analysis result
pub const ANALYSIS_TITLE: &str = "Analysis Results";

/// Fonts listed per page before the remainder is summarized
pub const MAX_FONTS_PER_PAGE: usize = 10;

pub const NO_PAGE_TEXT: &str = "No text extracted from this page.";
pub const NO_OCR_TEXT: &str = "No text could be extracted from images in the PDF.";
pub const NO_FONTS_IN_PDF: &str = "No fonts detected in the PDF";
pub const NO_FONTS_ON_PAGE: &str = "No fonts detected on this page.";

/// A rendered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    /// Shown as `File: <name>` under the title
    pub filename: Option<String>,
    pub sections: Vec<ReportSection>,
}

/// A titled group of blocks. Untitled sections render their blocks directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub heading: Option<String>,
    pub blocks: Vec<ReportBlock>,
}

/// A displayable unit inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ReportBlock {
    /// Highlighted warning text
    Warning(String),
    /// A minor heading inside a section
    Subheading(String),
    /// Text shown verbatim, line breaks preserved
    Preformatted(String),
    /// Plain sentence
    Note(String),
    /// De-emphasized sentence
    Muted(String),
    /// One list row of labelled values, e.g. `Name: Arial | Size: 12`
    Fields(Vec<(String, String)>),
    /// One list row of free text
    Item(String),
    /// Tabular data
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl ReportSection {
    fn titled(heading: &str, blocks: Vec<ReportBlock>) -> Self {
        Self {
            heading: Some(heading.to_string()),
            blocks,
        }
    }

    fn untitled(blocks: Vec<ReportBlock>) -> Self {
        Self {
            heading: None,
            blocks,
        }
    }
}

/// Render an optional analysis result. `None` renders nothing.
pub fn render_report(result: Option<&AnalysisResult>) -> Option<Report> {
    let result = result?;

    let report = match &result.body {
        AnalysisBody::OcrError { message } => Report {
            title: OCR_TITLE.to_string(),
            filename: result.filename.clone(),
            sections: vec![ReportSection::untitled(vec![ReportBlock::Warning(
                message.clone(),
            )])],
        },
        AnalysisBody::OcrPages { pages } => Report {
            title: OCR_TITLE.to_string(),
            filename: result.filename.clone(),
            sections: vec![ocr_pages_section(pages)],
        },
        AnalysisBody::FlatFonts { fonts } => Report {
            title: ANALYSIS_TITLE.to_string(),
            filename: result.filename.clone(),
            sections: vec![flat_fonts_section(fonts)],
        },
        AnalysisBody::StructuredFonts(fonts) => Report {
            title: ANALYSIS_TITLE.to_string(),
            filename: result.filename.clone(),
            sections: structured_sections(fonts),
        },
        AnalysisBody::Unrecognized => Report {
            title: ANALYSIS_TITLE.to_string(),
            filename: result.filename.clone(),
            sections: Vec::new(),
        },
    };

    Some(report)
}

fn ocr_pages_section(pages: &[OcrPage]) -> ReportSection {
    let mut blocks = Vec::new();

    if pages.is_empty() {
        blocks.push(ReportBlock::Note(NO_OCR_TEXT.to_string()));
    }

    for page in pages {
        blocks.push(ReportBlock::Subheading(format!("Page {}", page.page)));
        match &page.extracted_text {
            Some(text) => blocks.push(ReportBlock::Preformatted(text.clone())),
            None => blocks.push(ReportBlock::Muted(NO_PAGE_TEXT.to_string())),
        }
    }

    ReportSection::titled("Extracted Text from Images", blocks)
}

fn flat_fonts_section(fonts: &[PlacedFont]) -> ReportSection {
    let blocks = if fonts.is_empty() {
        vec![ReportBlock::Note(NO_FONTS_IN_PDF.to_string())]
    } else {
        fonts
            .iter()
            .map(|font| {
                ReportBlock::Fields(vec![
                    ("Name".to_string(), font.name.to_string()),
                    ("Size".to_string(), font.size.to_string()),
                    ("Page".to_string(), font.page.to_string()),
                ])
            })
            .collect()
    };

    ReportSection::titled("Detected Fonts", blocks)
}

fn structured_sections(fonts: &StructuredFonts) -> Vec<ReportSection> {
    let mut sections = Vec::new();

    if let Some(basic_info) = &fonts.basic_info {
        let blocks = basic_info
            .iter()
            .map(|font| {
                ReportBlock::Fields(vec![
                    ("Name".to_string(), font.name.to_string()),
                    ("Subtype".to_string(), font.subtype.to_string()),
                    ("Base Font".to_string(), font.basefont.to_string()),
                ])
            })
            .collect();
        sections.push(ReportSection::titled("Basic Font Information", blocks));
    }

    if !fonts.statistics.is_empty() {
        let rows = fonts
            .statistics
            .iter()
            .map(|stat| {
                vec![
                    stat.font_name.to_string(),
                    stat.font_size.to_string(),
                    stat.usage_count.to_string(),
                    stat.pages_display(),
                ]
            })
            .collect();
        let table = ReportBlock::Table {
            headers: ["Font Name", "Size", "Usage Count", "Pages Used"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows,
        };
        sections.push(ReportSection::titled("Font Usage Statistics", vec![table]));
    }

    if !fonts.by_page.is_empty() {
        let mut blocks = Vec::new();
        for page in &fonts.by_page {
            blocks.push(ReportBlock::Subheading(format_page_name(&page.page_key)));

            if page.fonts.is_empty() {
                blocks.push(ReportBlock::Note(NO_FONTS_ON_PAGE.to_string()));
                continue;
            }

            for font in page.fonts.iter().take(MAX_FONTS_PER_PAGE) {
                blocks.push(ReportBlock::Item(format!(
                    "{} (Size: {}, Color: {})",
                    font.name,
                    font.size,
                    format_color(&font.color)
                )));
            }

            if page.fonts.len() > MAX_FONTS_PER_PAGE {
                blocks.push(ReportBlock::Muted(format!(
                    "... and {} more fonts",
                    page.fonts.len() - MAX_FONTS_PER_PAGE
                )));
            }
        }
        sections.push(ReportSection::titled("Fonts by Page", blocks));
    }

    sections
}

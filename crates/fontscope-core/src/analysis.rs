//! Analysis variants and the decoded result model
//!
//! The backend answers every variant with a loosely-shaped JSON document.
//! [`AnalysisResult::from_value`] classifies that document once, on receipt,
//! into an explicit [`AnalysisBody`]. Everything downstream matches on the
//! enum instead of probing JSON fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::scalar_text;

// ─────────────────────────────────────────────────────────────────
// Variants
// ─────────────────────────────────────────────────────────────────

/// One of the four backend analysis modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisVariant {
    #[default]
    Basic,
    Detailed,
    Advanced,
    Ocr,
}

impl AnalysisVariant {
    /// All variants in display order
    pub const ALL: [AnalysisVariant; 4] = [
        AnalysisVariant::Basic,
        AnalysisVariant::Detailed,
        AnalysisVariant::Advanced,
        AnalysisVariant::Ocr,
    ];

    /// Endpoint path, appended to the configured base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            AnalysisVariant::Basic => "/api/fonts/basic",
            AnalysisVariant::Detailed => "/api/upload",
            AnalysisVariant::Advanced => "/api/fonts/advanced",
            AnalysisVariant::Ocr => "/api/fonts/ocr",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            AnalysisVariant::Basic => "Basic Analysis",
            AnalysisVariant::Detailed => "Detailed Analysis",
            AnalysisVariant::Advanced => "Advanced Analysis",
            AnalysisVariant::Ocr => "OCR Analysis",
        }
    }

    /// Fallback message when a request fails without a backend error string
    pub fn failure_message(self) -> &'static str {
        match self {
            AnalysisVariant::Ocr => "Failed to perform OCR analysis. Please try again.",
            _ => "Failed to analyze PDF. Please try again.",
        }
    }

    /// Stable lowercase identifier (`basic`, `detailed`, `advanced`, `ocr`)
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisVariant::Basic => "basic",
            AnalysisVariant::Detailed => "detailed",
            AnalysisVariant::Advanced => "advanced",
            AnalysisVariant::Ocr => "ocr",
        }
    }

    /// Position in [`AnalysisVariant::ALL`]
    pub fn index(self) -> usize {
        match self {
            AnalysisVariant::Basic => 0,
            AnalysisVariant::Detailed => 1,
            AnalysisVariant::Advanced => 2,
            AnalysisVariant::Ocr => 3,
        }
    }

    /// Variant at `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next variant, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous variant, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnalysisVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(AnalysisVariant::Basic),
            "detailed" => Ok(AnalysisVariant::Detailed),
            "advanced" => Ok(AnalysisVariant::Advanced),
            "ocr" => Ok(AnalysisVariant::Ocr),
            other => Err(format!(
                "unknown analysis variant '{}' (expected basic, detailed, advanced or ocr)",
                other
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────

/// A JSON leaf kept for display.
///
/// The backend is not consistent about number vs string fields, so leaves
/// are stored as-is and only turned into text when shown.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Scalar(pub Value);

impl Scalar {
    fn field(obj: &Map<String, Value>, key: &str) -> Self {
        Self(obj.get(key).cloned().unwrap_or(Value::Null))
    }

    /// The underlying JSON value
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scalar_text(&self.0))
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// ─────────────────────────────────────────────────────────────────
// Result model
// ─────────────────────────────────────────────────────────────────

/// One page of OCR output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OcrPage {
    pub page: Scalar,
    /// `None` when the backend sent no text or an empty string
    pub extracted_text: Option<String>,
}

/// One entry of a flat font list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedFont {
    pub name: Scalar,
    pub size: Scalar,
    pub page: Scalar,
}

/// Document-level font descriptor (`basic_info`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontDescriptor {
    pub name: Scalar,
    pub subtype: Scalar,
    pub basefont: Scalar,
}

/// Aggregated usage for one font/size pair (`statistics`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontUsage {
    /// Key of the entry in the statistics mapping
    pub key: String,
    pub font_name: Scalar,
    pub font_size: Scalar,
    pub usage_count: Scalar,
    pub pages_used: Vec<Scalar>,
}

impl FontUsage {
    /// Pages joined for display, e.g. `"1, 2, 5"`
    pub fn pages_display(&self) -> String {
        self.pages_used
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A font occurrence on one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFont {
    pub name: Scalar,
    pub size: Scalar,
    /// Either a color component sequence or a literal value
    pub color: Value,
}

/// Fonts found on one page, keyed as in the response (`page_1`, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFonts {
    pub page_key: String,
    pub fonts: Vec<PageFont>,
}

/// Payload of the advanced analysis
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StructuredFonts {
    /// Present only when the backend sent a `basic_info` list
    pub basic_info: Option<Vec<FontDescriptor>>,
    /// Mapping order of the response
    pub statistics: Vec<FontUsage>,
    /// Mapping order of the response
    pub by_page: Vec<PageFonts>,
}

/// Shape of a decoded response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisBody {
    /// OCR ran but reported an error
    OcrError { message: String },
    /// OCR text per page
    OcrPages { pages: Vec<OcrPage> },
    /// Flat list of font occurrences (basic and detailed variants)
    FlatFonts { fonts: Vec<PlacedFont> },
    /// Advanced analysis
    StructuredFonts(StructuredFonts),
    /// None of the known shapes
    Unrecognized,
}

/// A successful response, classified by shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// File name echoed by the backend, if any
    pub filename: Option<String>,
    pub body: AnalysisBody,
}

impl AnalysisResult {
    /// Classify a response document.
    ///
    /// Precedence: a truthy `ocr_analysis` wins, then a `font_analysis` list,
    /// then a `font_analysis` object. Anything else is `Unrecognized`.
    /// Individual entries are read leniently: missing fields become null.
    pub fn from_value(value: &Value) -> Self {
        let filename = value
            .get("filename")
            .filter(|v| !v.is_null())
            .map(scalar_text);

        let body = classify(value);
        if body == AnalysisBody::Unrecognized {
            tracing::warn!("Unrecognized analysis response shape");
        }

        Self { filename, body }
    }

    /// Whether this result came from the OCR endpoint shape
    pub fn is_ocr(&self) -> bool {
        matches!(
            self.body,
            AnalysisBody::OcrError { .. } | AnalysisBody::OcrPages { .. }
        )
    }
}

fn classify(value: &Value) -> AnalysisBody {
    if let Some(ocr) = value.get("ocr_analysis").filter(|v| is_truthy(v)) {
        return classify_ocr(ocr);
    }

    match value.get("font_analysis") {
        Some(Value::Array(entries)) => AnalysisBody::FlatFonts {
            fonts: entries.iter().map(placed_font).collect(),
        },
        Some(Value::Object(obj)) => AnalysisBody::StructuredFonts(structured_fonts(obj)),
        _ => AnalysisBody::Unrecognized,
    }
}

fn classify_ocr(ocr: &Value) -> AnalysisBody {
    if let Some(error) = ocr.get("error").filter(|v| is_truthy(v)) {
        return AnalysisBody::OcrError {
            message: scalar_text(error),
        };
    }

    let pages = ocr
        .get("ocr_results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .map(|entry| {
                    let extracted_text = entry
                        .get("extracted_text")
                        .filter(|v| is_truthy(v))
                        .map(scalar_text);
                    OcrPage {
                        page: Scalar(entry.get("page").cloned().unwrap_or(Value::Null)),
                        extracted_text,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    AnalysisBody::OcrPages { pages }
}

fn placed_font(entry: &Value) -> PlacedFont {
    let empty = Map::new();
    let obj = entry.as_object().unwrap_or(&empty);
    PlacedFont {
        name: Scalar::field(obj, "name"),
        size: Scalar::field(obj, "size"),
        page: Scalar::field(obj, "page"),
    }
}

fn structured_fonts(obj: &Map<String, Value>) -> StructuredFonts {
    let basic_info = obj
        .get("basic_info")
        .filter(|v| is_truthy(v))
        .map(|info| {
            info.as_array()
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(Value::as_object)
                        .map(|font| FontDescriptor {
                            name: Scalar::field(font, "name"),
                            subtype: Scalar::field(font, "subtype"),
                            basefont: Scalar::field(font, "basefont"),
                        })
                        .collect()
                })
                .unwrap_or_default()
        });

    let statistics = obj
        .get("statistics")
        .and_then(Value::as_object)
        .map(|stats| {
            display_order(stats)
                .into_iter()
                .map(|(key, stat)| {
                    let empty = Map::new();
                    let stat = stat.as_object().unwrap_or(&empty);
                    FontUsage {
                        key: key.clone(),
                        font_name: Scalar::field(stat, "font_name"),
                        font_size: Scalar::field(stat, "font_size"),
                        usage_count: Scalar::field(stat, "usage_count"),
                        pages_used: stat
                            .get("pages_used")
                            .and_then(Value::as_array)
                            .map(|pages| pages.iter().cloned().map(Scalar).collect())
                            .unwrap_or_default(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let by_page = obj
        .get("by_page")
        .and_then(Value::as_object)
        .map(|pages| {
            display_order(pages)
                .into_iter()
                .map(|(page_key, info)| PageFonts {
                    page_key: page_key.clone(),
                    fonts: info
                        .get("fonts")
                        .and_then(Value::as_array)
                        .map(|fonts| {
                            fonts
                                .iter()
                                .filter_map(Value::as_object)
                                .map(|font| PageFont {
                                    name: Scalar::field(font, "name"),
                                    size: Scalar::field(font, "size"),
                                    color: font.get("color").cloned().unwrap_or(Value::Null),
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();

    StructuredFonts {
        basic_info,
        statistics,
        by_page,
    }
}

/// Entries in the order a browser enumerates object properties: keys that
/// are array indices first, ascending, then the rest in document order.
fn display_order(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by_key(|(key, _)| array_index(key).map_or((1, 0), |i| (0, i)));
    entries
}

/// Canonical decimal integers below 2^32 - 1, e.g. "0" or "12" but not "012"
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}

/// Loose truthiness for optional JSON fields: null, false, zero and the
/// empty string count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

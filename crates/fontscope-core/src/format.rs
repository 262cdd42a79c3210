//! Small display formatters shared by the report renderer

use serde_json::Value;

/// Turn a page key into a heading: the first `_` becomes a space and the
/// whole key is upper-cased (`page_1` becomes `PAGE 1`).
pub fn format_page_name(page_key: &str) -> String {
    page_key.replacen('_', " ", 1).to_uppercase()
}

/// Render a color value: sequences are comma-joined without spaces, anything
/// else is shown as its scalar text.
pub fn format_color(color: &Value) -> String {
    match color {
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        other => scalar_text(other),
    }
}

/// Text for a JSON leaf value.
///
/// Strings render without quotes, integral numbers without a fractional part,
/// null as an empty string, and arrays comma-joined.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
            }
        }
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_page_name() {
        assert_eq!(format_page_name("page_1"), "PAGE 1");
        assert_eq!(format_page_name("page_extra_12"), "PAGE EXTRA_12");
        assert_eq!(format_page_name("cover"), "COVER");
    }

    #[test]
    fn test_format_color_sequence() {
        assert_eq!(format_color(&json!([0, 0, 0])), "0,0,0");
        assert_eq!(format_color(&json!([0.5, 1, 0.25])), "0.5,1,0.25");
    }

    #[test]
    fn test_format_color_scalar() {
        assert_eq!(format_color(&json!("DeviceGray")), "DeviceGray");
        assert_eq!(format_color(&json!(null)), "");
    }

    #[test]
    fn test_scalar_text_numbers() {
        assert_eq!(scalar_text(&json!(12)), "12");
        assert_eq!(scalar_text(&json!(12.0)), "12");
        assert_eq!(scalar_text(&json!(9.96)), "9.96");
    }
}

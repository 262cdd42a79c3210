//! Turning pasted or typed text into file paths
//!
//! Terminals deliver a dropped file as pasted text. Depending on the
//! terminal that text is a bare path, a shell-quoted path, a path with
//! backslash-escaped spaces, or a `file://` URI. Several files may arrive on
//! one line or on separate lines.

use std::path::{Path, PathBuf};

use url::Url;

/// Parse pasted text into paths, in order.
///
/// A line that names an existing path verbatim is taken whole, so
/// unquoted paths with spaces still work.
pub fn parse_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if Path::new(line).exists() {
            paths.push(PathBuf::from(line));
            continue;
        }

        paths.extend(split_shell_words(line).iter().map(|w| to_path(w)));
    }

    paths
}

/// Resolve a single typed path: surrounding quotes, `file://` URIs and a
/// leading `~` are handled
pub fn parse_single_path(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if Path::new(text).exists() {
        return Some(PathBuf::from(text));
    }

    let words = split_shell_words(text);
    match words.as_slice() {
        [single] => Some(to_path(single)),
        _ => Some(expand_tilde(text)),
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn to_path(word: &str) -> PathBuf {
    if word.starts_with("file://") {
        if let Some(path) = Url::parse(word).ok().and_then(|u| u.to_file_path().ok()) {
            return path;
        }
    }
    expand_tilde(word)
}

/// Split on unquoted whitespace, honouring `'...'`, `"..."` and backslash
/// escapes. An unterminated quote runs to the end of the line.
fn split_shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                in_word = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' => match chars.next() {
                            Some(escaped @ ('"' | '\\' | '$' | '`')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => current.push('\\'),
                        },
                        _ => current.push(q),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bare_path() {
        assert_eq!(
            parse_paths("/tmp/report.pdf"),
            vec![PathBuf::from("/tmp/report.pdf")]
        );
    }

    #[test]
    fn test_quoted_paths() {
        assert_eq!(
            parse_paths("'/tmp/my report.pdf' \"/tmp/other file.pdf\""),
            vec![
                PathBuf::from("/tmp/my report.pdf"),
                PathBuf::from("/tmp/other file.pdf")
            ]
        );
    }

    #[test]
    fn test_backslash_escaped_spaces() {
        assert_eq!(
            parse_paths("/tmp/my\\ report.pdf"),
            vec![PathBuf::from("/tmp/my report.pdf")]
        );
    }

    #[test]
    fn test_file_uri_is_percent_decoded() {
        assert_eq!(
            parse_paths("file:///tmp/my%20report.pdf"),
            vec![PathBuf::from("/tmp/my report.pdf")]
        );
    }

    #[test]
    fn test_one_path_per_line() {
        assert_eq!(
            parse_paths("/tmp/a.pdf\n\n/tmp/b.pdf\r\n"),
            vec![PathBuf::from("/tmp/a.pdf"), PathBuf::from("/tmp/b.pdf")]
        );
    }

    #[test]
    fn test_existing_path_with_spaces_taken_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("annual report.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let pasted = format!("{}\n", path.display());
        assert_eq!(parse_paths(&pasted), vec![path]);
    }

    #[test]
    fn test_empty_paste() {
        assert!(parse_paths("  \n\t\n").is_empty());
    }

    #[test]
    fn test_tilde_expansion() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~/docs/a.pdf"), home.join("docs/a.pdf"));
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("/abs/~x.pdf"), PathBuf::from("/abs/~x.pdf"));
    }

    #[test]
    fn test_single_path_strips_quotes() {
        assert_eq!(
            parse_single_path("  '/tmp/quoted name.pdf' "),
            Some(PathBuf::from("/tmp/quoted name.pdf"))
        );
        assert_eq!(parse_single_path("   "), None);
    }

    #[test]
    fn test_single_path_with_unquoted_spaces() {
        assert_eq!(
            parse_single_path("/tmp/not here/file.pdf"),
            Some(PathBuf::from("/tmp/not here/file.pdf"))
        );
    }
}

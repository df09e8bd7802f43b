//! JSON with comments
//!
//! Configuration, food, DRI and plan files may carry `//` and `/* */`
//! comments. They are blanked out before the text reaches serde_json, keeping
//! newlines so reported line numbers still match the file.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::{ConfigError, ConfigResult};

/// Characters of context shown on each side of a parse error
const EXCERPT_RADIUS: usize = 50;

/// Replace comments outside string literals with whitespace
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                chars.next();
                out.push_str("  ");
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                    out.push(' ');
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for next in chars.by_ref() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Parse JSON-with-comments text
pub fn parse_str<T: DeserializeOwned>(text: &str, path: &Path) -> ConfigResult<T> {
    let stripped = strip_comments(text);
    serde_json::from_str(&stripped).map_err(|e| ConfigError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
        excerpt: excerpt(&stripped, e.line(), e.column()),
    })
}

/// Read and parse a JSON-with-comments file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_str(&text, path)
}

/// Text surrounding a 1-based line/column position
fn excerpt(text: &str, line: usize, column: usize) -> String {
    let mut offset = 0;
    for (i, l) in text.split('\n').enumerate() {
        if i + 1 == line {
            // serde_json counts columns in bytes
            offset += column.saturating_sub(1).min(l.len());
            break;
        }
        offset += l.len() + 1;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let pos = chars.iter().position(|(i, _)| *i >= offset).unwrap_or(chars.len());
    let begin = pos.saturating_sub(EXCERPT_RADIUS);
    let end = (pos + EXCERPT_RADIUS).min(chars.len());

    chars[begin..end].iter().map(|(_, c)| *c).collect()
}

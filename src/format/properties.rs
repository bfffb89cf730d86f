//! Properties-file parsing for localization bundles.
//!
//! Supports the usual properties syntax: `#`/`!` comments, `=`, `:` or
//! whitespace between key and value, backslash line continuations and
//! `\uXXXX` escapes. Files that are not valid UTF-8 are decoded as
//! ISO-8859-1, which is what older bundles ship.

use std::collections::HashMap;
use std::path::Path;

use crate::reader::errors::{ModelError, ModelResult};
use crate::util::fs::decode_text;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Key/value pairs from a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Load a properties file.
    pub fn load(path: &Path) -> ModelResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| ModelError::io(path, e))?;
        Ok(Self::parse(&decode_text(bytes)))
    }

    /// Parse properties content. Never fails; unparseable escapes are kept as-is.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = content.lines();

        while let Some(line) = lines.next() {
            let line = line.trim_start_matches(WHITESPACE);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = line.to_string();
            while continues(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Properties { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A line continues when it ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || WHITESPACE.contains(&c) {
            end = i;
            break;
        }
    }

    let key = &line[..end];
    let rest = line[end..].trim_start_matches(WHITESPACE);
    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
    (key, rest.trim_start_matches(WHITESPACE))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                let decoded = Some(&hex)
                    .filter(|h| h.len() == 4 && h.chars().all(|c| c.is_ascii_hexdigit()))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => {
                        out.push(decoded);
                        chars.nth(3);
                    }
                    _ => out.push_str("\\u"),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_separators() {
        let props = Properties::parse("a=1\nb: 2\nc 3\nd = 4\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.get("d"), Some("4"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let props = Properties::parse("# comment\n! other\n\n   \nkey=value\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Some("value"));
    }

    #[test]
    fn test_continuation_lines() {
        let props = Properties::parse("bundleName = Example \\\n    Core Bundle\nnext=1\n");
        assert_eq!(props.get("bundleName"), Some("Example Core Bundle"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn test_escapes() {
        let props = Properties::parse("key\\ with\\ spaces=a\\tb\nvendor=Caf\\u00e9\nbad=\\uzz\n");
        assert_eq!(props.get("key with spaces"), Some("a\tb"));
        assert_eq!(props.get("vendor"), Some("Café"));
        assert_eq!(props.get("bad"), Some("\\uzz"));
    }

    #[test]
    fn test_unicode_escape_needs_four_hex_digits() {
        let props = Properties::parse("signed=\\u+0e9\nshort=\\u0e\n");
        assert_eq!(props.get("signed"), Some("\\u+0e9"));
        assert_eq!(props.get("short"), Some("\\u0e"));
    }

    #[test]
    fn test_empty_value() {
        let props = Properties::parse("empty=\n");
        assert_eq!(props.get("empty"), Some(""));
    }

    #[test]
    fn test_load_latin1() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bundle.properties");
        std::fs::write(&path, b"vendor=Caf\xe9\n").unwrap();

        let props = Properties::load(&path).unwrap();
        assert_eq!(props.get("vendor"), Some("Café"));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Properties::load(&tmp.path().join("missing.properties")).unwrap_err();
        assert!(err.is_not_found());
    }
}

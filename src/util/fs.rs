//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions};

use crate::reader::errors::{ModelError, ModelResult};

/// Encodings decoded byte-for-byte into the first 256 code points.
const LATIN1_ENCODINGS: &[&str] = &["iso-8859-1", "iso8859-1", "latin1", "l1", "us-ascii"];

/// Read a descriptor file to a string, dropping a leading byte order mark.
///
/// Content that is not valid UTF-8 is decoded as ISO-8859-1.
pub fn read_descriptor(path: &Path) -> ModelResult<String> {
    let bytes = fs::read(path).map_err(|e| ModelError::io(path, e))?;
    Ok(strip_bom(decode_text(bytes)))
}

/// Read an XML file, honoring the encoding named by its declaration.
pub fn read_xml_descriptor(path: &Path) -> ModelResult<String> {
    let bytes = fs::read(path).map_err(|e| ModelError::io(path, e))?;
    let content = match declared_encoding(&bytes) {
        Some(encoding) if is_latin1(&encoding) => decode_latin1(&bytes),
        _ => decode_text(bytes),
    };
    Ok(strip_bom(content))
}

/// Decode UTF-8, falling back to ISO-8859-1.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => decode_latin1(e.as_bytes()),
    }
}

/// Decode ISO-8859-1; every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

fn is_latin1(encoding: &str) -> bool {
    LATIN1_ENCODINGS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(encoding))
}

/// `encoding` pseudo-attribute of a leading XML declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    // The declaration itself is ASCII whatever the document encoding
    let declaration = std::str::from_utf8(&bytes[..end]).ok()?;

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let value = &rest[1..];
    Some(value[..value.find(quote)?].to_string())
}

/// Files directly inside `dir` whose names match `pattern`, sorted by path.
///
/// Metacharacters in `dir` itself are escaped, so only `pattern` globs.
pub fn files_matching(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full_pattern = Path::new(&escaped).join(pattern);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let entries = match glob_with(&full_pattern.to_string_lossy(), options) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("invalid glob pattern {}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut results = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    results.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    results.sort();
    results
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
/// Returns the path as-is if canonicalization fails.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

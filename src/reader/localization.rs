//! Localized manifest header values.
//!
//! A header value starting with `%` names a key in the bundle's
//! localization file. The default locale file is always used so that the
//! same sources produce the same model on every machine. Resolution never
//! fails: when the file or the key is missing, the key itself is returned.

use std::path::{Path, PathBuf};

use crate::format::{ManifestHeaders, Properties};

/// Marker prefix of a localized value.
pub const LOCALIZATION_MARKER: char = '%';

/// Header naming the localization base file.
pub const LOCALIZATION_HEADER: &str = "Bundle-Localization";

/// Localization file used when the header is absent.
pub const DEFAULT_LOCALIZATION_FILE: &str = "OSGI-INF/l10n/bundle.properties";

const PROPERTIES_EXTENSION: &str = ".properties";

/// Localization file of a bundle, relative to its project root.
///
/// `Bundle-Localization` is a base name; `.properties` is appended unless
/// the value already carries it.
pub fn localization_file(headers: &ManifestHeaders, project_root: &Path) -> PathBuf {
    match headers.non_empty(LOCALIZATION_HEADER) {
        Some(base) if base.ends_with(PROPERTIES_EXTENSION) => project_root.join(base),
        Some(base) => project_root.join(format!("{}{}", base, PROPERTIES_EXTENSION)),
        None => project_root.join(DEFAULT_LOCALIZATION_FILE),
    }
}

/// Resolve a possibly localized value against a localization file.
pub fn resolve(raw: &str, l10n_file: &Path) -> String {
    let Some(key) = raw.strip_prefix(LOCALIZATION_MARKER) else {
        return raw.to_string();
    };

    if !l10n_file.exists() {
        tracing::debug!(
            "localization file {} not found, using key `{}`",
            l10n_file.display(),
            key
        );
        return key.to_string();
    }

    match Properties::load(l10n_file) {
        Ok(props) => match props.get(key) {
            Some(translation) if !translation.is_empty() => translation.to_string(),
            _ => key.to_string(),
        },
        Err(e) => {
            tracing::warn!("{}, using key `{}`", e, key);
            key.to_string()
        }
    }
}

/// Value of an optional manifest header, localized.
///
/// Returns `None` when the header is absent or empty.
pub fn localized_header(
    headers: &ManifestHeaders,
    name: &str,
    project_root: &Path,
) -> Option<String> {
    let raw = headers.non_empty(name)?;
    Some(resolve(raw, &localization_file(headers, project_root)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn headers(content: &str) -> ManifestHeaders {
        ManifestHeaders::parse(content, Path::new("MANIFEST.MF")).unwrap()
    }

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(resolve("Example Bundle", Path::new("/nope")), "Example Bundle");
    }

    #[test]
    fn test_missing_file_returns_key() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join(DEFAULT_LOCALIZATION_FILE);
        assert_eq!(resolve("%foo", &file), "foo");
    }

    #[test]
    fn test_translation_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join(DEFAULT_LOCALIZATION_FILE);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "bundleName=Example Bundle\nempty=\n").unwrap();

        assert_eq!(resolve("%bundleName", &file), "Example Bundle");
        assert_eq!(resolve("%empty", &file), "empty");
        assert_eq!(resolve("%unknown", &file), "unknown");
    }

    #[test]
    fn test_unreadable_file_returns_key() {
        let tmp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let file = tmp.path().join("bundle.properties");
        fs::create_dir(&file).unwrap();

        assert_eq!(resolve("%name", &file), "name");
    }

    #[test]
    fn test_localization_file_default() {
        let h = headers("Bundle-SymbolicName: a\n");
        assert_eq!(
            localization_file(&h, Path::new("/p")),
            PathBuf::from("/p/OSGI-INF/l10n/bundle.properties")
        );
    }

    #[test]
    fn test_localization_file_header() {
        let h = headers("Bundle-Localization: plugin\n");
        assert_eq!(
            localization_file(&h, Path::new("/p")),
            PathBuf::from("/p/plugin.properties")
        );

        let h = headers("Bundle-Localization: l10n/plugin.properties\n");
        assert_eq!(
            localization_file(&h, Path::new("/p")),
            PathBuf::from("/p/l10n/plugin.properties")
        );
    }

    #[test]
    fn test_localized_header() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("plugin.properties"), "vendor = Example Corp\n").unwrap();
        let h = headers("Bundle-Localization: plugin\nBundle-Vendor: %vendor\nBundle-Name: \n");

        assert_eq!(
            localized_header(&h, "Bundle-Vendor", tmp.path()).as_deref(),
            Some("Example Corp")
        );
        assert_eq!(localized_header(&h, "Bundle-Name", tmp.path()), None);
        assert_eq!(localized_header(&h, "Bundle-Copyright", tmp.path()), None);
    }
}

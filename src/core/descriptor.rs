//! Descriptor kinds and the probe that picks one for a project directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::fs::files_matching;

/// OSGi bundle manifest, relative to the project root.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Feature descriptor file name.
pub const FEATURE_FILE: &str = "feature.xml";

/// Category descriptor file name.
pub const CATEGORY_FILE: &str = "category.xml";

/// Glob for product descriptor file names.
pub const PRODUCT_PATTERN: &str = "*.product";

/// Product files starting with this prefix are generated and never picked.
pub const IGNORED_PRODUCT_PREFIX: &str = ".polyglot";

/// Eclipse project metadata file holding the project name.
pub const PROJECT_FILE: &str = ".project";

/// A descriptor found in a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// `META-INF/MANIFEST.MF`
    Module(PathBuf),
    /// `feature.xml`
    Feature(PathBuf),
    /// `*.product`
    Product(PathBuf),
    /// `category.xml`
    Category(PathBuf),
}

impl DescriptorKind {
    /// Find the descriptor of a project directory.
    ///
    /// Probes manifest, feature, product and category in that order; the
    /// first one present wins.
    pub fn probe(project_root: &Path) -> Option<Self> {
        let manifest = project_root.join(MANIFEST_PATH);
        if manifest.is_file() {
            return Some(DescriptorKind::Module(manifest));
        }

        let feature = project_root.join(FEATURE_FILE);
        if feature.is_file() {
            return Some(DescriptorKind::Feature(feature));
        }

        if let Some(product) = find_product_file(project_root) {
            return Some(DescriptorKind::Product(product));
        }

        let category = project_root.join(CATEGORY_FILE);
        if category.is_file() {
            return Some(DescriptorKind::Category(category));
        }

        None
    }

    /// Path of the descriptor file.
    pub fn path(&self) -> &Path {
        match self {
            DescriptorKind::Module(p)
            | DescriptorKind::Feature(p)
            | DescriptorKind::Product(p)
            | DescriptorKind::Category(p) => p,
        }
    }

    /// Short human-readable kind name.
    pub fn label(&self) -> &'static str {
        match self {
            DescriptorKind::Module(_) => "bundle manifest",
            DescriptorKind::Feature(_) => "feature",
            DescriptorKind::Product(_) => "product",
            DescriptorKind::Category(_) => "category",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.path().display())
    }
}

/// Project directory of a descriptor file found by a locator.
///
/// Works for any descriptor path, including build project files.
pub fn project_root_of(descriptor: &Path) -> &Path {
    let parent = descriptor.parent().unwrap_or(Path::new("."));
    if descriptor.ends_with(MANIFEST_PATH) {
        parent.parent().unwrap_or(parent)
    } else {
        parent
    }
}

/// Pick the product descriptor of a directory.
///
/// When several product files exist the lexicographically first name wins,
/// so the choice does not depend on directory listing order.
pub fn find_product_file(project_root: &Path) -> Option<PathBuf> {
    let candidates: Vec<PathBuf> = files_matching(project_root, PRODUCT_PATTERN)
        .into_iter()
        .filter(|p| {
            p.file_name()
                .map(|n| !n.to_string_lossy().starts_with(IGNORED_PRODUCT_PREFIX))
                .unwrap_or(false)
        })
        .collect();

    if candidates.len() > 1 {
        tracing::warn!(
            "{} product files found in {}, using {}",
            candidates.len(),
            project_root.display(),
            candidates[0].display()
        );
    }

    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_probe_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(DescriptorKind::probe(tmp.path()), None);
    }

    #[test]
    fn test_probe_priority() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(CATEGORY_FILE));
        assert!(matches!(
            DescriptorKind::probe(tmp.path()),
            Some(DescriptorKind::Category(_))
        ));

        touch(&tmp.path().join("app.product"));
        assert!(matches!(
            DescriptorKind::probe(tmp.path()),
            Some(DescriptorKind::Product(_))
        ));

        touch(&tmp.path().join(FEATURE_FILE));
        assert!(matches!(
            DescriptorKind::probe(tmp.path()),
            Some(DescriptorKind::Feature(_))
        ));

        touch(&tmp.path().join(MANIFEST_PATH));
        let kind = DescriptorKind::probe(tmp.path()).unwrap();
        assert!(matches!(kind, DescriptorKind::Module(_)));
        assert_eq!(project_root_of(kind.path()), tmp.path());
    }

    #[test]
    fn test_project_root_of() {
        assert_eq!(
            project_root_of(Path::new("/w/bundle/META-INF/MANIFEST.MF")),
            Path::new("/w/bundle")
        );
        assert_eq!(project_root_of(Path::new("/w/feature/feature.xml")), Path::new("/w/feature"));
        assert_eq!(project_root_of(Path::new("/w/pom.xml")), Path::new("/w"));
    }

    #[test]
    fn test_manifest_directory_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(MANIFEST_PATH)).unwrap();
        assert_eq!(DescriptorKind::probe(tmp.path()), None);
    }

    #[test]
    fn test_product_skips_ignored_prefix() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(".polyglot.app.product"));
        assert_eq!(find_product_file(tmp.path()), None);

        touch(&tmp.path().join("real.product"));
        assert_eq!(
            find_product_file(tmp.path()),
            Some(tmp.path().join("real.product"))
        );
    }

    #[test]
    fn test_product_tie_break_is_lexicographic() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("zeta.product"));
        touch(&tmp.path().join("alpha.product"));

        assert_eq!(
            find_product_file(tmp.path()),
            Some(tmp.path().join("alpha.product"))
        );
    }
}

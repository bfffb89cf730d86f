//! Version string normalization.
//!
//! OSGi development versions end in `.qualifier`, which the build replaces
//! with a timestamp. The project model uses the snapshot convention instead.
//! The mapping is purely textual: nothing is parsed as a number.

/// Suffix marking an unreleased OSGi version.
pub const QUALIFIER_SUFFIX: &str = ".qualifier";

/// Suffix marking an unreleased project model version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Map a descriptor version to a project model version.
///
/// `1.0.0.qualifier` becomes `1.0.0-SNAPSHOT`; anything else is returned
/// unchanged, so normalizing twice gives the same result.
pub fn normalize_version(version: &str) -> String {
    match version.strip_suffix(QUALIFIER_SUFFIX) {
        Some(base) => format!("{}{}", base, SNAPSHOT_SUFFIX),
        None => version.to_string(),
    }
}

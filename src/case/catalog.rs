use std::path::Path;

use tracing::warn;

use crate::case::case_model::TestCase;

// ============================================================================
// Test-case catalog file — JSON array of TestCase records
// ============================================================================

/// Load a catalog of test cases from a JSON file.
///
/// A missing or malformed catalog is not an error: the file is reinitialized
/// to an empty array and an empty list is returned, so a fresh checkout or a
/// hand-edited catalog with a typo never aborts startup.
pub fn load_catalog(path: &Path) -> Vec<TestCase> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("catalog '{}' not readable ({}), reinitializing", path.display(), e);
            reinitialize(path);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<TestCase>>(&content) {
        Ok(cases) => cases,
        Err(e) => {
            warn!("catalog '{}' is malformed ({}), reinitializing", path.display(), e);
            reinitialize(path);
            Vec::new()
        }
    }
}

/// Write a catalog of test cases as pretty-printed JSON.
pub fn save_catalog(path: &Path, cases: &[TestCase]) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(cases)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// Reset the catalog file to an empty JSON array. Failures are logged and
/// swallowed; the caller already has its empty list.
fn reinitialize(path: &Path) {
    if let Err(e) = std::fs::write(path, "[]") {
        warn!("could not reinitialize catalog '{}': {}", path.display(), e);
    }
}

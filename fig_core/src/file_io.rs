//! # File I/O Module
//!
//! Reads and writes catalog files.
//!
//! - **Atomic saves**: write to `.tmp`, sync, rename over the target
//! - **Validation on load**: a catalog that cannot drive the state machine
//!   is rejected before any front end sees it
//!
//! ## File Format
//!
//! Catalogs are pretty-printed JSON:
//!
//! ```json
//! {
//!   "title": "Figures",
//!   "options": [
//!     { "id": "figure1", "label": "Figure 1", "resource": "figures/figure1.png" },
//!     { "id": "figure3", "label": "Figure 3", "resource": "figures/figure3a.png", "has_sub_buttons": true }
//!   ],
//!   "sub_buttons": [ { "label": "Panel A", "resource": "figures/figure3a.png" } ],
//!   "panel": { "title": "About", "body": "..." }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use fig_core::catalog::Catalog;
//! use fig_core::file_io::{load_catalog, save_catalog};
//! use std::path::Path;
//!
//! let path = Path::new("figures.json");
//! save_catalog(&Catalog::builtin(), path)?;
//! let catalog = load_catalog(path)?;
//! # Ok::<(), fig_core::errors::ViewError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::errors::{ViewError, ViewResult};

/// Serialize a catalog to pretty JSON.
pub fn catalog_to_json(catalog: &Catalog) -> ViewResult<String> {
    serde_json::to_string_pretty(catalog).map_err(|e| ViewError::serialization(e.to_string()))
}

/// Parse and validate a catalog from JSON text.
pub fn catalog_from_json(json: &str) -> ViewResult<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|e| ViewError::serialization(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Save a catalog with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk
/// 4. Rename over `path`
pub fn save_catalog(catalog: &Catalog, path: &Path) -> ViewResult<()> {
    let json = catalog_to_json(catalog)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        ViewError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        ViewError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        ViewError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        ViewError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "catalog saved");
    Ok(())
}

/// Load and validate a catalog file.
///
/// # Returns
///
/// * `Err(ViewError::FileError)` - I/O error
/// * `Err(ViewError::SerializationError)` - Invalid JSON
/// * `Err(ViewError::InvalidCatalog)` - Parsed, but unusable
pub fn load_catalog(path: &Path) -> ViewResult<Catalog> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ViewError::file_error("read", path.display().to_string(), e.to_string()))?;

    let catalog = catalog_from_json(&contents).map_err(|e| match e {
        ViewError::SerializationError { reason } => {
            ViewError::serialization(format!("Invalid JSON in {}: {}", path.display(), reason))
        }
        other => other,
    })?;

    info!(
        path = %path.display(),
        options = catalog.options.len(),
        sub_buttons = catalog.sub_buttons.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_catalog_path(name: &str) -> PathBuf {
        temp_dir().join(format!("figsel_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let path = temp_catalog_path("disk");
        let catalog = Catalog::builtin();
        save_catalog(&catalog, &path).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_catalog_path("atomic");
        let tmp_path = temp_dir().join("figsel_test_atomic.json.tmp");

        save_catalog(&Catalog::builtin(), &path).unwrap();
        assert!(path.exists());
        assert!(!tmp_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(&temp_catalog_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let path = temp_catalog_path("bad_json");
        fs::write(&path, "{ not json").unwrap();

        match load_catalog(&path) {
            Err(ViewError::SerializationError { reason }) => {
                assert!(reason.contains("figsel_test_bad_json.json"));
            }
            other => panic!("expected SerializationError, got {:?}", other),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_catalog() {
        let path = temp_catalog_path("empty_options");
        fs::write(&path, r#"{"options": []}"#).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_catalog_json_marks_sub_button_option() {
        let json = catalog_to_json(&Catalog::builtin()).unwrap();
        assert!(json.contains("\"has_sub_buttons\": true"));
    }
}

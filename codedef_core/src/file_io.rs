//! # File I/O Module
//!
//! Saves and loads [`CodeSettings`] files with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//! - **Id validation**: Every stored code id must exist in its family
//!
//! ## File Format
//!
//! Settings are saved as pretty-printed JSON. Code selections are stored as
//! bare numeric ids keyed by family:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "selections": { "steel": 2, "concrete": 101 }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use codedef_core::codes::SteelCode;
//! use codedef_core::file_io::{load_settings, save_settings};
//! use codedef_core::settings::CodeSettings;
//! use std::path::Path;
//!
//! let mut settings = CodeSettings::new();
//! settings.select_code(SteelCode::AiscLrfd93);
//!
//! let path = Path::new("codes.json");
//! save_settings(&settings, path)?;
//! let loaded = load_settings(path)?;
//! assert_eq!(loaded.selected::<SteelCode>(), SteelCode::AiscLrfd93);
//! # Ok::<(), codedef_core::errors::CodeError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CodeError, CodeResult};
use crate::settings::{CodeSettings, SCHEMA_VERSION};

/// Save settings to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize settings to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
pub fn save_settings(settings: &CodeSettings, path: &Path) -> CodeResult<()> {
    settings.validate()?;

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| CodeError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CodeError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CodeError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CodeError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CodeError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), selections = settings.selections.len(), "saved code settings");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(CodeSettings)` - Loaded and validated
/// * `Err(CodeError::VersionMismatch)` - File version is incompatible
/// * `Err(CodeError::SerializationError)` - Invalid JSON or an undeclared code id
/// * `Err(CodeError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CodeResult<CodeSettings> {
    let mut file = File::open(path)
        .map_err(|e| CodeError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CodeError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: CodeSettings = serde_json::from_str(&contents).map_err(|e| {
        CodeError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&settings.version)?;

    // A stored id outside its table means the file is corrupt or was written
    // by a newer build; refuse it rather than silently dropping the entry.
    settings.validate().map_err(|e| match e {
        CodeError::UnknownCode { family, id } => CodeError::serialization(format!(
            "{} stores {} code id {}, which this build does not declare",
            path.display(),
            family,
            id
        )),
        other => other,
    })?;

    tracing::debug!(path = %path.display(), selections = settings.selections.len(), "loaded code settings");
    Ok(settings)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CodeResult<()> {
    let mismatch = || CodeError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    // every segment must be numeric; "0.x.1" is not "0.1"
    let parse = |version: &str| -> Option<Vec<u32>> {
        version.trim().split('.').map(|p| p.parse().ok()).collect()
    };
    let (Some(file_parts), Some(current_parts)) = (parse(file_version), parse(SCHEMA_VERSION)) else {
        return Err(mismatch());
    };

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{CodeFamily, ConcreteCode, SteelCode};
    use std::env::temp_dir;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("codedef_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");

        let mut settings = CodeSettings::new();
        settings.select_code(SteelCode::AiscLrfd93);
        settings.select_code(ConcreteCode::Aci318m25);
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.selected::<SteelCode>(), SteelCode::AiscLrfd93);
        assert_eq!(loaded.selected_id(CodeFamily::Concrete), 101);
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_settings(&CodeSettings::new(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_selection() {
        let path = temp_settings_path("invalid_save");
        let mut settings = CodeSettings::new();
        settings.selections.insert(CodeFamily::Steel, 500);

        assert!(save_settings(&settings, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_rejects_undeclared_id() {
        let path = temp_settings_path("undeclared");
        let json = r#"{
            "version": "0.1.0",
            "created": "2025-01-01T00:00:00Z",
            "modified": "2025-01-01T00:00:00Z",
            "selections": { "steel": 2, "cold-formed-steel": 42 }
        }"#;
        fs::write(&path, json).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(err.is_data_corruption());
        assert!(err.to_string().contains("Cold-Formed Steel code id 42"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_settings_path("does_not_exist");
        assert!(matches!(load_settings(&path), Err(CodeError::FileError { .. })));
    }

    #[test]
    fn test_load_newer_schema() {
        let path = temp_settings_path("newer");
        let json = r#"{
            "version": "0.9.0",
            "created": "2025-01-01T00:00:00Z",
            "modified": "2025-01-01T00:00:00Z"
        }"#;
        fs::write(&path, json).unwrap();

        assert!(matches!(load_settings(&path), Err(CodeError::VersionMismatch { .. })));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
        assert!(validate_version("").is_err());
    }

    #[test]
    fn test_version_with_non_numeric_segment() {
        assert!(matches!(
            validate_version("0.x.1"),
            Err(CodeError::VersionMismatch { .. })
        ));
        assert!(validate_version("0.1.0-beta").is_err());
        assert!(validate_version("0..1").is_err());
    }
}

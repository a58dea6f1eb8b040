// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local JSON files: the registry snapshot and the sync settings.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use staffsync::SyncSettings;
use staffsync_domain::{
    DepartmentMapping, Office, QualificationMapping, QualificationMaster, StaffRecord,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The internal registry as exported to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    pub staff: Vec<StaffRecord>,
    pub offices: Vec<Office>,
    pub qualification_masters: Vec<QualificationMaster>,
    pub department_mappings: Vec<DepartmentMapping>,
    pub qualification_mappings: Vec<QualificationMapping>,
}

impl RegistrySnapshot {
    /// Returns the snapshot with its staff collection replaced.
    #[must_use]
    pub fn with_staff(&self, staff: Vec<StaffRecord>) -> Self {
        Self {
            staff,
            ..self.clone()
        }
    }
}

/// Reads a file to a string.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads and decodes a JSON file.
///
/// # Errors
///
/// Returns `CliError::Io` or `CliError::InvalidJson`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text: String = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::InvalidJson {
        path: path.display().to_string(),
        source,
    })
}

/// Loads sync settings, falling back to defaults when no file is given.
///
/// # Errors
///
/// Returns a read or parse error, or `CliError::Sync` for unusable settings.
pub fn load_settings(path: Option<&Path>) -> Result<SyncSettings, CliError> {
    let settings: SyncSettings = match path {
        Some(path) => read_json(path)?,
        None => SyncSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

/// Writes `snapshot` as one whole file.
///
/// The content goes to a sibling temporary file that is then renamed over
/// `path`, so readers see either the old registry or the new one.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be written.
pub fn write_snapshot(path: &Path, snapshot: &RegistrySnapshot) -> Result<(), CliError> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.display().to_string(),
        source,
    };
    let text: String = serde_json::to_string_pretty(snapshot).map_err(|source| {
        CliError::InvalidJson {
            path: path.display().to_string(),
            source,
        }
    })?;

    let mut staging: PathBuf = path.to_path_buf();
    staging.as_mut_os_string().push(".tmp");
    fs::write(&staging, text).map_err(io_error)?;
    fs::rename(&staging, path).map_err(io_error)?;

    info!(path = %path.display(), staff = snapshot.staff.len(), "Wrote registry snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf = std::env::temp_dir().join(format!(
            "staffsync-cli-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_snapshot_sections_default_to_empty() {
        let snapshot: RegistrySnapshot = serde_json::from_str(
            r#"{"offices":[{"id":"office-north","name":"North Care Center","business_type":"home_care"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.offices.len(), 1);
        assert!(snapshot.staff.is_empty());
        assert!(snapshot.qualification_mappings.is_empty());
    }

    #[test]
    fn test_with_staff_keeps_other_sections() {
        let snapshot: RegistrySnapshot = serde_json::from_str(
            r#"{"offices":[{"id":"office-north","name":"North Care Center","business_type":"home_care"}]}"#,
        )
        .unwrap();
        let replaced: RegistrySnapshot =
            snapshot.with_staff(vec![StaffRecord::new("staff-1", "office-north", "Sato Hanako", 1)]);
        assert_eq!(replaced.staff.len(), 1);
        assert_eq!(replaced.offices, snapshot.offices);
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let settings: SyncSettings = load_settings(None).unwrap();
        assert_eq!(settings, SyncSettings::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let dir: PathBuf = scratch_dir("settings");
        let path: PathBuf = dir.join("settings.json");
        fs::write(&path, r#"{"default_base_salary": -5}"#).unwrap();

        let result: Result<SyncSettings, CliError> = load_settings(Some(&path));
        assert!(matches!(result, Err(CliError::Sync(_))));
    }

    #[test]
    fn test_write_then_read_snapshot() {
        let dir: PathBuf = scratch_dir("write");
        let path: PathBuf = dir.join("registry.json");
        let snapshot: RegistrySnapshot = RegistrySnapshot::default()
            .with_staff(vec![StaffRecord::new("staff-1", "office-north", "Sato Hanako", 1)]);

        write_snapshot(&path, &snapshot).unwrap();

        let read: RegistrySnapshot = read_json(&path).unwrap();
        assert_eq!(read, snapshot);
        assert!(!dir.join("registry.json.tmp").exists());
    }

    #[test]
    fn test_unreadable_file_names_the_path() {
        let error: CliError = read_text(Path::new("/nonexistent/registry.json")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/registry.json"));
    }
}

//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PlannerError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// Open and parse failures are both reported as `StorageUnreadable`.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, PlannerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| {
        PlannerError::StorageUnreadable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map(Some).map_err(|e| {
        PlannerError::StorageUnreadable(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Temp file used while writing `path`; lives in the same directory so the
/// final rename stays on one filesystem
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PlannerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PlannerError::StorageWrite(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| PlannerError::StorageWrite(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), PlannerError> {
    let file = File::create(temp_path)
        .map_err(|e| PlannerError::StorageWrite(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PlannerError::StorageWrite(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| PlannerError::StorageWrite(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PlannerError::StorageWrite(format!("Failed to sync data: {}", e)))
}

use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single policy-service export (256 MB).
/// Large organizations produce big `licenses.json` payloads, but anything
/// beyond this is treated as a corrupt or hostile file.
pub const MAX_EXPORT_SIZE: u64 = 256 * 1024 * 1024;

/// Reads a regular file into memory after rejecting symlinks, non-files and
/// oversized files.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human readable name used in error messages (e.g. "applications.json")
///
/// # Errors
/// Returns `ReportError::SecurityError` for symlinks and oversized files, and
/// `ReportError::FileReadError` for everything else.
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Copy the export into the JSON directory instead of linking it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ReportError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_EXPORT_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Verify that the export was not truncated or concatenated".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Maps an application key to a single path component.
///
/// Path separators become `_`; empty, `.` and `..` become `_`.
pub fn safe_file_name(value: &str) -> String {
    let name: String = value
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    match name.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => name,
    }
}

/// Validates that `path` is an existing directory and not a symbolic link.
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::InvalidPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: "Directory is a symbolic link".to_string(),
            hint: "Point the config at the real directory".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(ReportError::InvalidPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

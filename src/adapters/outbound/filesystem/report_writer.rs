use crate::ports::outbound::{OutputPresenter, ReportArtifact};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// ReportDirectoryWriter adapter writing each artifact into the reports directory
///
/// This adapter implements the OutputPresenter port for file output.
pub struct ReportDirectoryWriter {
    reports_dir: PathBuf,
}

impl ReportDirectoryWriter {
    pub fn new(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }

    /// Resolves the artifact path, rejecting names that leave the directory
    fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        let name = Path::new(file_name);
        if name.components().count() != 1 || name.file_name().is_none() {
            return Err(ReportError::FileWriteError {
                path: self.reports_dir.join(file_name),
                details: format!("Invalid report file name: {}", file_name),
            }
            .into());
        }
        Ok(self.reports_dir.join(name))
    }

    fn validate_reports_dir(&self) -> Result<()> {
        if !self.reports_dir.is_dir() {
            return Err(ReportError::FileWriteError {
                path: self.reports_dir.clone(),
                details: format!(
                    "Reports directory does not exist: {}",
                    self.reports_dir.display()
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Refuses to write through an existing symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(ReportError::FileWriteError {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. Writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for ReportDirectoryWriter {
    fn present(&self, artifact: &ReportArtifact) -> Result<()> {
        self.validate_reports_dir()?;
        let path = self.target_path(&artifact.file_name)?;
        Self::validate_output_security(&path)?;

        fs::write(&path, &artifact.content).map_err(|e| ReportError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "report written");
        Ok(())
    }
}

/// StdoutPresenter adapter printing artifacts to stdout
///
/// Each artifact is preceded by a `==> name <==` header line.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, artifact: &ReportArtifact) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "==> {} <==", artifact.file_name)
            .and_then(|_| stdout.write_all(artifact.content.as_bytes()))
            .and_then(|_| {
                if artifact.content.ends_with('\n') {
                    Ok(())
                } else {
                    writeln!(stdout)
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

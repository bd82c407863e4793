use crate::application::read_models::LicenseReportReadModel;
use crate::shared::Result;

/// A named piece of formatted output, e.g. `web-portal.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub content: String,
}

impl ReportArtifact {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// ReportFormatter port for rendering license reports
///
/// This port abstracts the formatting logic for the different report
/// outputs (per-application CSV, high-risk text, Markdown, JSON).
pub trait ReportFormatter {
    /// Formats the report read model into one or more artifacts
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &LicenseReportReadModel) -> Result<Vec<ReportArtifact>>;
}

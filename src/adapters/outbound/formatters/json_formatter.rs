use crate::application::read_models::LicenseReportReadModel;
use crate::ports::outbound::{ReportArtifact, ReportFormatter};
use crate::shared::Result;
use anyhow::Context;

pub const JSON_REPORT_FILE: &str = "report.json";

/// JsonFormatter adapter serialising the whole read model as `report.json`
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &LicenseReportReadModel) -> Result<Vec<ReportArtifact>> {
        let mut content =
            serde_json::to_string_pretty(model).context("Failed to serialize license report")?;
        content.push('\n');
        Ok(vec![ReportArtifact::new(JSON_REPORT_FILE, content)])
    }
}

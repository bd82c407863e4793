use crate::application::read_models::LicenseReportReadModel;
use crate::ports::outbound::{ReportArtifact, ReportFormatter};
use crate::shared::Result;

pub const RED_REPORT_FILE: &str = "RedDependencies.txt";

/// RedReportFormatter adapter listing high-risk dependencies as plain text
pub struct RedReportFormatter;

impl RedReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RedReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for RedReportFormatter {
    fn format(&self, model: &LicenseReportReadModel) -> Result<Vec<ReportArtifact>> {
        let mut output = String::new();
        for entry in &model.high_risk.dependencies {
            output.push_str(&format!("* {}:\n", entry.component));
            output.push_str(&format!("   -- Threat: {}\n", entry.threat));
            output.push_str(&format!("   -- License: {}\n", entry.licenses));
            output.push_str(&format!("   -- Used in: {}\n", entry.used_in.join(", ")));
        }
        Ok(vec![ReportArtifact::new(RED_REPORT_FILE, output)])
    }
}

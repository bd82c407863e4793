use crate::application::read_models::{ApplicationReportView, LicenseReportReadModel};
use crate::ports::outbound::{ReportArtifact, ReportFormatter};
use crate::shared::security::safe_file_name;
use crate::shared::Result;

const CSV_HEADER: &str = "\"Threat level\",Licenses,Status,Component\n";

/// CsvFormatter adapter writing one `<application>.csv` per application
///
/// Applications skipped during loading get no file. Path separators in the
/// application key become `_` in the file name. Every data cell is quoted;
/// embedded quotes are doubled.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }

    fn render_application(application: &ApplicationReportView) -> String {
        let mut output = String::from(CSV_HEADER);
        for row in &application.rows {
            output.push_str(&format!(
                "{},{},{},{}\n",
                Self::quote(&row.threat),
                Self::quote(&row.licenses),
                Self::quote(&row.status),
                Self::quote(&row.component)
            ));
        }
        output
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, model: &LicenseReportReadModel) -> Result<Vec<ReportArtifact>> {
        Ok(model
            .applications
            .iter()
            .filter(|app| app.loaded)
            .map(|app| {
                ReportArtifact::new(
                    format!("{}.csv", safe_file_name(&app.key)),
                    Self::render_application(app),
                )
            })
            .collect())
    }
}

use crate::application::read_models::LicenseReportReadModel;

/// ReportResponse - Internal response DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Everything the formatters need
    pub read_model: LicenseReportReadModel,
    /// Whether any dependency met the high-risk threshold
    pub has_high_risk: bool,
}

impl ReportResponse {
    pub fn new(read_model: LicenseReportReadModel) -> Self {
        let has_high_risk = !read_model.high_risk.dependencies.is_empty();
        Self {
            read_model,
            has_high_risk,
        }
    }
}

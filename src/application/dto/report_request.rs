use crate::license_compliance::catalog::DEFAULT_HIGH_RISK_THRESHOLD;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Threat score at or above which a dependency is listed as high-risk
    pub high_risk_threshold: u32,
}

impl ReportRequest {
    pub fn new(high_risk_threshold: u32) -> Self {
        Self {
            high_risk_threshold,
        }
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_RISK_THRESHOLD)
    }
}

//! License report read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! everything the formatters render in a query-optimized format.

use super::application_report_view::ApplicationReportView;
use super::high_risk_view::HighRiskView;
use super::license_summary_view::LicenseSummaryView;
use serde::Serialize;

/// Main read model for a reporting run
///
/// A denormalized, serializable view of the catalogs following the
/// CQRS-lite pattern. Formatters only ever see this struct.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseReportReadModel {
    pub metadata: ReportMetadataView,
    /// One entry per application, in catalog key order
    pub applications: Vec<ApplicationReportView>,
    pub license_summary: LicenseSummaryView,
    pub high_risk: HighRiskView,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
    pub organization_id: String,
    pub total_dependencies: usize,
}

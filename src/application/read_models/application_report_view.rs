//! Per-application view of the dependency rows

use serde::Serialize;

/// View of one application and its dependency rows
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReportView {
    /// Catalog key; the CSV file stem after path separators are replaced
    pub key: String,
    pub name: String,
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    /// False when the application was skipped during loading
    pub loaded: bool,
    pub rows: Vec<DependencyRowView>,
}

/// One dependency as listed for an application
#[derive(Debug, Clone, Serialize)]
pub struct DependencyRowView {
    /// Display value: a number, `Unsupported`, or `N/A`
    pub threat: String,
    pub threat_score: Option<u32>,
    pub licenses: String,
    pub status: String,
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_licenses: Option<String>,
}

//! High-risk ("red") dependency view

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HighRiskView {
    pub threshold: u32,
    pub dependencies: Vec<HighRiskEntryView>,
    /// Dependencies without a computed threat; never high-risk
    pub unscored: Vec<UnscoredEntryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighRiskEntryView {
    pub component: String,
    pub threat: u32,
    pub licenses: String,
    pub status: String,
    pub used_in: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnscoredEntryView {
    pub component: String,
    /// `Unsupported` or `N/A`
    pub threat: String,
    pub used_in: Vec<String>,
}

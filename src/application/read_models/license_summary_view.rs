//! Category summary view

use serde::Serialize;

/// All dependencies grouped by license category
#[derive(Debug, Clone, Serialize)]
pub struct LicenseSummaryView {
    /// Non-empty categories in report order
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: String,
    /// Number of dependencies in this category
    pub total: usize,
    /// Sorted by expression
    pub expressions: Vec<ExpressionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpressionView {
    pub expression: String,
    pub count: usize,
    /// Coordinate keys, sorted
    pub dependencies: Vec<String>,
}

//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the catalogs for the formatters.

pub mod application_report_view;
pub mod high_risk_view;
pub mod license_report_read_model;
pub mod license_report_read_model_builder;
pub mod license_summary_view;

pub use application_report_view::{ApplicationReportView, DependencyRowView};
pub use high_risk_view::{HighRiskEntryView, HighRiskView, UnscoredEntryView};
pub use license_report_read_model::{LicenseReportReadModel, ReportMetadataView};
pub use license_report_read_model_builder::LicenseReportReadModelBuilder;
pub use license_summary_view::{CategoryView, ExpressionView, LicenseSummaryView};

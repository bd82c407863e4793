//! iq-license-report - license categorization for Nexus IQ organizations
//!
//! This library resolves the licenses of every dependency used by the
//! applications of an organization, assigns each license expression to a
//! category and renders per-application, per-category and high-risk reports.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_compliance`): catalogs, license resolution and categorization
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): Config file loading and settings resolution
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use iq_license_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let mut applications = ApplicationCatalog::new("org-1");
//! let mut dependencies = DependencyCatalog::new();
//!
//! let load = LoadLicensesUseCase::new(
//!     FileSystemReportSource::new(PathBuf::from("json")),
//!     StderrProgressReporter::new(),
//! );
//! load.execute(&mut applications, &mut dependencies)?;
//!
//! let generate = GenerateReportUseCase::new(StderrProgressReporter::new());
//! let response = generate.execute(&ReportRequest::default(), &applications, &dependencies)?;
//!
//! for artifact in MarkdownFormatter::new().format(&response.read_model)? {
//!     println!("{}", artifact.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_compliance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReportSource, ReportDirectoryWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, JsonFormatter, MarkdownFormatter, RedReportFormatter,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::LicenseReportReadModel;
    pub use crate::application::use_cases::{GenerateReportUseCase, LoadLicensesUseCase};
    pub use crate::license_compliance::catalog::{ApplicationCatalog, DependencyCatalog};
    pub use crate::license_compliance::domain::{
        Application, Coordinates, Dependency, LicenseCategory, LicenseInfo, Threat,
    };
    pub use crate::license_compliance::policies::{LicenseNormalizer, LicensePriority};
    pub use crate::license_compliance::services::{LicenseAggregator, LicenseCategorizer};
    pub use crate::ports::outbound::{
        LicenseReportSource, OutputPresenter, ProgressReporter, ReportArtifact, ReportFormatter,
    };
    pub use crate::shared::Result;
}

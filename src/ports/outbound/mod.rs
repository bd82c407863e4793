/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the use cases rely on to read exports,
/// render reports and talk to the user.
pub mod formatter;
pub mod license_report_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::{ReportArtifact, ReportFormatter};
pub use license_report_source::{ApplicationListing, LicenseReportSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

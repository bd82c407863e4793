/// Use cases module containing application business logic orchestration
mod generate_report;
mod load_licenses;

pub use generate_report::GenerateReportUseCase;
pub use load_licenses::{LoadLicensesUseCase, LoadSummary};

pub mod application_catalog;
pub mod dependency_catalog;

pub use application_catalog::ApplicationCatalog;
pub use dependency_catalog::{DependencyCatalog, DEFAULT_HIGH_RISK_THRESHOLD};

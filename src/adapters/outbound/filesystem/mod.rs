/// Filesystem adapters: saved export reader and report writers
mod nexus_json;
mod report_source;
mod report_writer;

pub use report_source::FileSystemReportSource;
pub use report_writer::{ReportDirectoryWriter, StdoutPresenter};

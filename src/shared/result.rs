/// Result alias used by the application, port and adapter layers.
/// Catalog operations return `ReportError` directly; everything above them
/// propagates through `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

use crate::ports::outbound::ReportArtifact;
use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (reports directory, stdout)
/// where formatted artifacts end up.
pub trait OutputPresenter {
    /// Presents one formatted artifact
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The target path is a symbolic link
    /// - The destination directory is missing
    fn present(&self, artifact: &ReportArtifact) -> Result<()>;
}

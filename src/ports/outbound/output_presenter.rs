use crate::shared::Result;

/// OutputPresenter port for the rendered report's destination
pub trait OutputPresenter {
    /// Writes the rendered report, replacing any previous report
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}

use crate::report_generation::domain::PackageReference;
use crate::shared::Result;

/// ReportFormatter port for rendering the final package list
pub trait ReportFormatter {
    /// Renders the packages, in the given order, as a complete document
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, packages: &[PackageReference]) -> Result<String>;
}

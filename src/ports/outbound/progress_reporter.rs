/// ProgressReporter port for user-facing run output
///
/// Carries the discovered project lists, per-package lookup warnings and the
/// license resolution progress. `--quiet` swaps in a reporter that drops
/// everything.
pub trait ProgressReporter {
    /// Reports an informational line
    fn report(&self, message: &str);

    /// Reports position in the license resolution loop
    ///
    /// # Arguments
    /// * `current` - 1-based index of the package being resolved
    /// * `total` - Number of packages to resolve
    /// * `message` - Usually the package name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem, such as a failed license lookup
    fn report_error(&self, message: &str);

    /// Ends the progress display with a summary line
    fn report_completion(&self, message: &str);
}

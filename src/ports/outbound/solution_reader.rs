use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SolutionReader port for reading the solution manifest
pub trait SolutionReader {
    /// Reads the raw text of the solution file
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_solution(&self, solution_path: &Path) -> Result<String>;

    /// Returns the directory project paths are resolved against
    ///
    /// # Errors
    /// Returns `SolutionDirectoryNotFound` if the directory does not exist
    fn solution_directory(&self, solution_path: &Path) -> Result<PathBuf>;
}

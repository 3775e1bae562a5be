use crate::shared::Result;
use std::path::Path;

/// ProjectReader port for reading project manifests
pub trait ProjectReader {
    /// Reads the raw text of a project file
    ///
    /// # Errors
    /// Returns `ProjectFileNotFound` if the project file does not exist
    fn read_project(&self, project_path: &Path) -> Result<String>;

    /// Reads the `packages.config` next to a project file, if there is one
    ///
    /// # Returns
    /// `None` when the project has no `packages.config`
    fn read_packages_config(&self, project_path: &Path) -> Result<Option<String>>;
}

use crate::ports::outbound::{ProjectReader, SolutionReader};
use crate::shared::error::ReportError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Name of the legacy package manifest kept next to a project file
const PACKAGES_CONFIG: &str = "packages.config";

/// FileSystemReader adapter for reading solution and project manifests
///
/// This adapter implements both SolutionReader and ProjectReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionReader for FileSystemReader {
    fn read_solution(&self, solution_path: &Path) -> Result<String> {
        if !solution_path.exists() {
            return Err(ReportError::SolutionFileNotFound {
                path: solution_path.to_path_buf(),
            }
            .into());
        }

        read_text_file(solution_path, "solution file").map_err(|e| {
            ReportError::FileReadError {
                path: solution_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn solution_directory(&self, solution_path: &Path) -> Result<PathBuf> {
        let directory = match solution_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !directory.is_dir() {
            return Err(ReportError::SolutionDirectoryNotFound { path: directory }.into());
        }

        Ok(directory)
    }
}

impl ProjectReader for FileSystemReader {
    fn read_project(&self, project_path: &Path) -> Result<String> {
        if !project_path.exists() {
            return Err(ReportError::ProjectFileNotFound {
                path: project_path.to_path_buf(),
            }
            .into());
        }

        read_text_file(project_path, "project file").map_err(|e| {
            ReportError::FileReadError {
                path: project_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_packages_config(&self, project_path: &Path) -> Result<Option<String>> {
        let packages_config = match project_path.parent() {
            Some(parent) => parent.join(PACKAGES_CONFIG),
            None => PathBuf::from(PACKAGES_CONFIG),
        };

        if !packages_config.exists() {
            return Ok(None);
        }

        log::debug!("Reading {}", packages_config.display());
        let content = read_text_file(&packages_config, PACKAGES_CONFIG).map_err(|e| {
            ReportError::FileReadError {
                path: packages_config.clone(),
                details: e.to_string(),
            }
        })?;

        Ok(Some(content))
    }
}

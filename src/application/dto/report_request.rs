use crate::report_generation::domain::PackageReference;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Output file name used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "licenses.html";

const HTML_EXTENSION: &str = ".html";

/// ReportRequest - parameters of one report generation run
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the `.sln` file
    pub solution_path: PathBuf,
    /// Directory the report is written to
    pub output_directory: PathBuf,
    /// Report file name, always ending in `.html`
    pub output_file: String,
    /// Prefixes of project file names to skip
    pub excluded_projects: Vec<String>,
    /// Prefixes of package names to skip
    pub excluded_references: Vec<String>,
    /// Already-resolved packages appended after license resolution
    pub additional_packages: Vec<PackageReference>,
}

impl ReportRequest {
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }

    /// Full path of the report file
    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(&self.output_file)
    }

    /// Normalises a requested output file name
    ///
    /// Blank or missing names become `licenses.html`; `.html` is appended
    /// when the name does not already end with it.
    pub fn normalize_output_file(file_name: Option<&str>) -> String {
        let trimmed = file_name.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return DEFAULT_OUTPUT_FILE.to_string();
        }

        if trimmed.ends_with(HTML_EXTENSION) {
            trimmed.to_string()
        } else {
            format!("{}{}", trimmed, HTML_EXTENSION)
        }
    }
}

/// Builder for [`ReportRequest`]
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    solution_path: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    output_file: Option<String>,
    excluded_projects: Vec<String>,
    excluded_references: Vec<String>,
    additional_packages: Vec<PackageReference>,
}

impl ReportRequestBuilder {
    pub fn solution_path(mut self, path: impl AsRef<Path>) -> Self {
        self.solution_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn output_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn output_file(mut self, file_name: Option<String>) -> Self {
        self.output_file = file_name;
        self
    }

    pub fn excluded_projects(mut self, prefixes: Vec<String>) -> Self {
        self.excluded_projects = prefixes;
        self
    }

    pub fn excluded_references(mut self, prefixes: Vec<String>) -> Self {
        self.excluded_references = prefixes;
        self
    }

    pub fn additional_packages(mut self, packages: Vec<PackageReference>) -> Self {
        self.additional_packages = packages;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns a validation error if no solution path was set
    pub fn build(self) -> Result<ReportRequest> {
        let solution_path = self
            .solution_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| ReportError::Validation {
                message: "solution_path is required".to_string(),
            })?;

        Ok(ReportRequest {
            solution_path,
            output_directory: self.output_directory.unwrap_or_else(|| PathBuf::from(".")),
            output_file: ReportRequest::normalize_output_file(self.output_file.as_deref()),
            excluded_projects: self.excluded_projects,
            excluded_references: self.excluded_references,
            additional_packages: self.additional_packages,
        })
    }
}

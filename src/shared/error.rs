use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Negative values identify the specific reason a run was refused or aborted,
/// so wrapper scripts can tell an argument problem from a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 1,
    /// Any error raised while running the pipeline
    Failure = -1,
    /// No solution file was given
    SolutionFileNotSpecified = -9,
    /// The solution file does not exist or is not a `.sln` file
    InvalidSolutionFile = -10,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// One-line summary printed at the end of every run
    pub fn message(self) -> String {
        match self {
            ExitCode::Success => "Res(0):\tGeneration successful..".to_string(),
            ExitCode::SolutionFileNotSpecified => {
                "ERR(-9):\tA solution file path was not specified!".to_string()
            }
            ExitCode::InvalidSolutionFile => {
                "ERR(-10):\tThe specified solution file is invalid!".to_string()
            }
            other => format!("ERR({}):\tAn unknown error occurred..", other.as_i32()),
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (1)"),
            ExitCode::Failure => write!(f, "Failure (-1)"),
            ExitCode::SolutionFileNotSpecified => write!(f, "Solution File Not Specified (-9)"),
            ExitCode::InvalidSolutionFile => write!(f, "Invalid Solution File (-10)"),
        }
    }
}

/// Fatal errors for license report generation.
///
/// Anything in this enum aborts the run before the report is written.
/// Per-package license lookup failures are not represented here; they are
/// reported as warnings and the package keeps empty license fields.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Solution file not found: {path}\n\n💡 Hint: Please verify the path passed with --solution-file")]
    SolutionFileNotFound { path: PathBuf },

    #[error("The directory {path} does not exist\n\n💡 Hint: Project paths are resolved relative to the solution file's directory")]
    SolutionDirectoryNotFound { path: PathBuf },

    #[error("Project file not found: {path}\n\n💡 Hint: The solution references a project that is missing on disk")]
    ProjectFileNotFound { path: PathBuf },

    #[error("Failed to parse project file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is well-formed XML")]
    ProjectParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

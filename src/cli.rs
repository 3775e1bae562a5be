use clap::Parser;
use std::path::PathBuf;

/// Generate an HTML third-party license report for a .NET solution
#[derive(Parser, Debug)]
#[command(name = "nuget-license-report")]
#[command(version)]
#[command(
    about = "Generate an HTML third-party license report from the NuGet references of a .NET solution",
    long_about = None
)]
pub struct Args {
    /// The solution file to generate the NuGet licenses from. This must be a .sln file
    #[arg(short = 'f', long = "solution-file", value_name = "SLN")]
    pub solution_file: Option<String>,

    /// Comma separated prefixes of project file names to exclude (case-insensitive)
    #[arg(
        short = 't',
        long = "exclude-projects-filter",
        value_name = "PREFIXES",
        value_delimiter = ','
    )]
    pub exclude_projects_filter: Vec<String>,

    /// Comma separated prefixes of package names to exclude (case-insensitive)
    #[arg(
        short = 'r',
        long = "exclude-reference-filter",
        value_name = "PREFIXES",
        value_delimiter = ','
    )]
    pub exclude_reference_filter: Vec<String>,

    /// Directory the report is written to (created if missing)
    #[arg(short = 'd', long = "output-directory", default_value = ".")]
    pub output_directory: PathBuf,

    /// Report file name; ".html" is appended when missing [default: licenses.html]
    #[arg(short = 's', long = "output-file")]
    pub output_file: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file (defaults to license-report.config.yml next to the solution)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Solution path with surrounding whitespace removed, if one was given
    pub fn solution_file(&self) -> Option<&str> {
        self.solution_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

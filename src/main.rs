mod cli;

use clap::Parser;
use cli::Args;
use nuget_license_report::adapters::outbound::console::{
    QuietProgressReporter, StderrProgressReporter,
};
use nuget_license_report::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, NuGetCacheReader,
};
use nuget_license_report::adapters::outbound::formatters::HtmlFormatter;
use nuget_license_report::adapters::outbound::network::NuGetRegistryClient;
use nuget_license_report::application::dto::{ReportRequest, ReportResponse};
use nuget_license_report::application::use_cases::GenerateReportUseCase;
use nuget_license_report::config::{self, ConfigFile};
use nuget_license_report::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use nuget_license_report::shared::error::{ExitCode, ReportError};
use nuget_license_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

const SOLUTION_EXTENSION: &str = ".sln";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let exit_code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(exit_code.as_i32());
        }
    };

    // --quiet leaves only the result line
    let default_filter = if args.quiet { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let exit_code = match validate_solution_file(args.solution_file()) {
        Err(exit_code) => exit_code,
        Ok(solution_path) => match run(&args, solution_path).await {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                if !args.quiet {
                    print_error(&e);
                }
                ExitCode::Failure
            }
        },
    };

    show_message(exit_code);
    process::exit(exit_code.as_i32());
}

async fn run(args: &Args, solution_path: PathBuf) -> Result<()> {
    let config = load_config(args, &solution_path)?;
    let request = build_request(args, solution_path, config)?;

    let output_directory = request.output_directory.clone();
    let output_path = request.output_path();

    let response = if args.quiet {
        generate(request, QuietProgressReporter::new()).await?
    } else {
        generate(request, StderrProgressReporter::new()).await?
    };

    let html = HtmlFormatter::new().format(&response.packages)?;
    // Nothing touches the output location until the report exists
    create_output_directory(&output_directory)?;
    FileSystemWriter::new(output_path.clone()).present(&html)?;

    if !args.quiet {
        eprintln!("📝 Report written to {}", output_path.display());
    }

    Ok(())
}

async fn generate<PR: ProgressReporter>(
    request: ReportRequest,
    progress_reporter: PR,
) -> Result<ReportResponse> {
    // Create adapters (Dependency Injection)
    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        NuGetCacheReader::from_environment(),
        NuGetRegistryClient::new()?,
        progress_reporter,
    );

    use_case.execute(request).await
}

/// Maps the solution argument to the path to use, or to the exit code refusing it
fn validate_solution_file(solution_file: Option<&str>) -> std::result::Result<PathBuf, ExitCode> {
    let Some(solution_file) = solution_file else {
        return Err(ExitCode::SolutionFileNotSpecified);
    };

    if !solution_file.ends_with(SOLUTION_EXTENSION) {
        return Err(ExitCode::InvalidSolutionFile);
    }

    let path = PathBuf::from(solution_file);
    if !path.is_file() {
        return Err(ExitCode::InvalidSolutionFile);
    }

    Ok(path)
}

/// Loads `--config`, or discovers a config file next to the solution
fn load_config(args: &Args, solution_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }

    let solution_directory = match solution_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    config::discover_config(solution_directory)
}

/// Merges command-line arguments with the config file
///
/// Exclusion lists are concatenated; `--output-file` wins over the config.
fn build_request(
    args: &Args,
    solution_path: PathBuf,
    config: Option<ConfigFile>,
) -> Result<ReportRequest> {
    let mut excluded_projects = args.exclude_projects_filter.clone();
    let mut excluded_references = args.exclude_reference_filter.clone();
    let mut output_file = args.output_file.clone();
    let mut additional_packages = Vec::new();

    if let Some(config) = config {
        additional_packages = config.additional_package_references();
        excluded_projects.extend(config.exclude_projects.unwrap_or_default());
        excluded_references.extend(config.exclude_references.unwrap_or_default());
        output_file = output_file.or(config.output_file);
    }

    ReportRequest::builder()
        .solution_path(solution_path)
        .output_directory(&args.output_directory)
        .output_file(output_file)
        .excluded_projects(excluded_projects)
        .excluded_references(excluded_references)
        .additional_packages(additional_packages)
        .build()
}

fn create_output_directory(directory: &Path) -> Result<()> {
    if directory.is_dir() {
        return Ok(());
    }

    log::debug!("Creating output directory {}", directory.display());
    std::fs::create_dir_all(directory).map_err(|e| {
        ReportError::FileWriteError {
            path: directory.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

fn print_error(e: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }
}

fn show_message(exit_code: ExitCode) {
    println!();
    if exit_code == ExitCode::Success {
        println!("{}", exit_code.message().green());
    } else {
        println!("{}", exit_code.message().red());
    }
}

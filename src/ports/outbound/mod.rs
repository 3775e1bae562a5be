/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod nuspec_cache;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod project_reader;
pub mod solution_reader;

pub use formatter::ReportFormatter;
pub use nuspec_cache::NuspecCache;
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use project_reader::ProjectReader;
pub use solution_reader::SolutionReader;

/// Outbound adapters implementing the ports used by report generation
///
/// - `filesystem`: solution, project and packages.config reading, the NuGet
///   global packages cache, and the report writer
/// - `network`: the nuget.org flat container and package download endpoints
/// - `console`: progress output on stderr
/// - `formatters`: HTML rendering
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;

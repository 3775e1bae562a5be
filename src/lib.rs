//! nuget-license-report - third-party license reports for .NET solutions
//!
//! This library reads a Visual Studio solution, collects the NuGet package
//! references of its projects, resolves each package's license metadata and
//! renders the result as a single HTML attribution page. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Pure parsing, filtering and domain models
//! - **Application Layer** (`application`): Use cases and request/response DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nuget_license_report::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     NuGetCacheReader::from_environment(),
//!     NuGetRegistryClient::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ReportRequest::builder()
//!     .solution_path("MySolution.sln")
//!     .excluded_references(vec!["Microsoft.".to_string()])
//!     .build()?;
//! let output_path = request.output_path();
//! let response = use_case.execute(request).await?;
//!
//! // Render and write
//! let html = HtmlFormatter::new().format(&response.packages)?;
//! FileSystemWriter::new(output_path).present(&html)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, NuGetCacheReader,
    };
    pub use crate::adapters::outbound::formatters::HtmlFormatter;
    pub use crate::adapters::outbound::network::NuGetRegistryClient;
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::use_cases::{GenerateReportUseCase, LicenseResolver, LicenseSource};
    pub use crate::ports::outbound::{
        NuspecCache, OutputPresenter, PackageRegistry, ProgressReporter, ProjectReader,
        ReportFormatter, SolutionReader,
    };
    pub use crate::report_generation::domain::{LicenseInfo, PackageReference};
    pub use crate::report_generation::services::{
        NuspecParser, PackageArchive, PrefixFilter, ProjectParser, ReferenceSet, SolutionParser,
    };
    pub use crate::shared::Result;
}

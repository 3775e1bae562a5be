use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::use_cases::LicenseResolver;
use crate::ports::outbound::{
    NuspecCache, PackageRegistry, ProgressReporter, ProjectReader, SolutionReader,
};
use crate::report_generation::domain::PackageReference;
use crate::report_generation::services::{
    PrefixFilter, ProjectParser, ReferenceSet, SolutionParser,
};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GenerateReportUseCase - Core use case for license report generation
///
/// Runs the pipeline strictly forward: solution → project filter →
/// reference extraction → reference filter → license resolution. Every
/// infrastructure dependency is injected through generics.
///
/// # Type Parameters
/// * `SR` - SolutionReader implementation
/// * `PJ` - ProjectReader implementation
/// * `C` - NuspecCache implementation
/// * `REG` - PackageRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<SR, PJ, C, REG, PR> {
    solution_reader: SR,
    project_reader: PJ,
    license_resolver: LicenseResolver<C, REG>,
    progress_reporter: PR,
}

impl<SR, PJ, C, REG, PR> GenerateReportUseCase<SR, PJ, C, REG, PR>
where
    SR: SolutionReader,
    PJ: ProjectReader,
    C: NuspecCache,
    REG: PackageRegistry,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        solution_reader: SR,
        project_reader: PJ,
        nuspec_cache: C,
        package_registry: REG,
        progress_reporter: PR,
    ) -> Self {
        Self {
            solution_reader,
            project_reader,
            license_resolver: LicenseResolver::new(nuspec_cache, package_registry),
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Fails on a missing solution, solution directory or project file, and
    /// on project manifests that are not well-formed XML. License lookups
    /// never fail the run.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Discover projects
        let content = self.solution_reader.read_solution(&request.solution_path)?;
        let projects = SolutionParser::parse(&content);
        self.report_list("Found Project Files:", &projects);

        // Step 2: Exclude projects
        let project_filter = PrefixFilter::new(&request.excluded_projects);
        let projects = project_filter.filter_projects(projects);
        self.report_list("Filtered Project Files:", &projects);
        self.warn_unmatched(&project_filter, "project");

        let solution_directory = self
            .solution_reader
            .solution_directory(&request.solution_path)?;
        let project_paths: Vec<PathBuf> = projects
            .iter()
            .map(|project| solution_directory.join(project))
            .collect();

        // Step 3: Collect package references
        let mut references = Vec::new();
        for project_path in &project_paths {
            references.extend(self.extract_references(project_path)?);
        }
        let references = ReferenceSet::deduplicate(references);
        self.progress_reporter.report(&format!(
            "✅ Detected {} unique package reference(s)",
            references.len()
        ));

        // Step 4: Exclude references
        let reference_filter = PrefixFilter::new(&request.excluded_references);
        let original_count = references.len();
        let references = reference_filter.filter_references(references);
        let excluded_count = original_count - references.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} package reference(s) based on filters",
                excluded_count
            ));
        }
        self.warn_unmatched(&reference_filter, "reference");
        let references = ReferenceSet::sort_by_name(references);

        // Step 5: Resolve licenses
        self.progress_reporter
            .report("🔍 Fetching license information...");
        let mut packages = self.resolve_licenses(references).await;

        let resolved_count = packages.iter().filter(|p| !p.license().is_empty()).count();
        let unresolved_count = packages.len() - resolved_count;
        self.progress_reporter.report_completion(&format!(
            "✅ License information: {} found, {} missing",
            resolved_count, unresolved_count
        ));

        // Step 6: Additional packages go last, untouched
        packages.extend(request.additional_packages);

        Ok(ReportResponse::new(packages, resolved_count, unresolved_count))
    }

    /// Reads a project's references, falling back to `packages.config`
    fn extract_references(&self, project_path: &Path) -> Result<Vec<PackageReference>> {
        let content = self.project_reader.read_project(project_path)?;
        let references = ProjectParser::parse_package_references(&content)
            .map_err(|e| project_parse_error(project_path, e))?;

        if !references.is_empty() {
            return Ok(references);
        }

        match self.project_reader.read_packages_config(project_path)? {
            Some(config) => {
                log::debug!("Using packages.config of {}", project_path.display());
                ProjectParser::parse_packages_config(&config)
                    .map_err(|e| project_parse_error(project_path, e))
            }
            None => Ok(references),
        }
    }

    /// Resolves one package at a time, in order
    async fn resolve_licenses(&self, references: Vec<PackageReference>) -> Vec<PackageReference> {
        let total = references.len();
        let mut resolved = Vec::with_capacity(total);

        for (idx, reference) in references.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(reference.name()));
            resolved.push(
                self.license_resolver
                    .resolve(reference, &self.progress_reporter)
                    .await,
            );
        }

        resolved
    }

    fn report_list(&self, heading: &str, items: &[String]) {
        self.progress_reporter.report(heading);
        for item in items {
            self.progress_reporter.report(&format!("   {}", item));
        }
    }

    fn warn_unmatched(&self, filter: &PrefixFilter, kind: &str) {
        for prefix in filter.get_unmatched_prefixes() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude {} prefix '{}' did not match anything.",
                kind, prefix
            ));
        }
    }
}

fn project_parse_error(project_path: &Path, error: anyhow::Error) -> anyhow::Error {
    ReportError::ProjectParseError {
        path: project_path.to_path_buf(),
        details: error.to_string(),
    }
    .into()
}

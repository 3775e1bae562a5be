use crate::ports::outbound::{NuspecCache, PackageRegistry, ProgressReporter};
use crate::report_generation::domain::{LicenseInfo, PackageReference};
use crate::report_generation::services::{NuspecParser, PackageArchive};
use crate::shared::Result;
use std::fmt;

/// Tier a package's license data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSource {
    /// Manifest found in the local NuGet packages folder
    LocalCache,
    /// Manifest downloaded from the flat-container endpoint
    Registry,
    /// Manifest extracted from the downloaded package archive
    PackageArchive,
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseSource::LocalCache => write!(f, "local cache"),
            LicenseSource::Registry => write!(f, "registry"),
            LicenseSource::PackageArchive => write!(f, "package archive"),
        }
    }
}

/// LicenseResolver - finds license data for one package at a time
///
/// Lookup order:
/// 1. the cached `.nuspec` in the local packages folder;
/// 2. the `.nuspec` from the registry's flat container;
/// 3. the `.nuspec` inside the package archive, only when step 2 failed.
///
/// No tier failure is fatal. Problems are reported as warnings and the
/// package is returned without license data.
pub struct LicenseResolver<C, REG> {
    cache: C,
    registry: REG,
}

impl<C, REG> LicenseResolver<C, REG>
where
    C: NuspecCache,
    REG: PackageRegistry,
{
    pub fn new(cache: C, registry: REG) -> Self {
        Self { cache, registry }
    }

    /// Returns the package enriched with whatever license data was found
    pub async fn resolve<PR: ProgressReporter>(
        &self,
        package: PackageReference,
        progress_reporter: &PR,
    ) -> PackageReference {
        match self.lookup(&package, progress_reporter).await {
            Some((license, source)) => {
                log::debug!("License for {} taken from {}", package, source);
                package.with_license(license)
            }
            None => package,
        }
    }

    /// Runs the tiered lookup and reports which tier answered
    pub async fn lookup<PR: ProgressReporter>(
        &self,
        package: &PackageReference,
        progress_reporter: &PR,
    ) -> Option<(LicenseInfo, LicenseSource)> {
        if let Some(license) = self.from_local_cache(package, progress_reporter) {
            return Some((license, LicenseSource::LocalCache));
        }

        match self
            .registry
            .fetch_nuspec(package.name(), package.version())
            .await
        {
            Ok(content) => {
                log::debug!("Received nuspec for {}", package);
                return match NuspecParser::parse(&content) {
                    Ok(license) => Some((license, LicenseSource::Registry)),
                    Err(e) => {
                        progress_reporter.report_error(&format!(
                            "⚠️  Warning: Could not read the nuspec of {}: {}",
                            package, e
                        ));
                        None
                    }
                };
            }
            Err(e) => {
                progress_reporter.report_error(&format!("⚠️  Warning: {}", e));
            }
        }

        match self.from_package_archive(package, progress_reporter).await {
            Ok(license) => license.map(|l| (l, LicenseSource::PackageArchive)),
            Err(e) => {
                progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch license information for {}: {}",
                    package, e
                ));
                None
            }
        }
    }

    fn from_local_cache<PR: ProgressReporter>(
        &self,
        package: &PackageReference,
        progress_reporter: &PR,
    ) -> Option<LicenseInfo> {
        let content = match self
            .cache
            .read_cached_nuspec(package.name(), package.version())
        {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not read the cached nuspec of {}: {}",
                    package, e
                ));
                return None;
            }
        };

        match NuspecParser::parse(&content) {
            Ok(license) => Some(license),
            Err(e) => {
                progress_reporter.report_error(&format!(
                    "⚠️  Warning: Cached nuspec of {} is invalid: {}",
                    package, e
                ));
                None
            }
        }
    }

    async fn from_package_archive<PR: ProgressReporter>(
        &self,
        package: &PackageReference,
        progress_reporter: &PR,
    ) -> Result<Option<LicenseInfo>> {
        if package.name().trim().is_empty() || package.version().trim().is_empty() {
            return Ok(None);
        }

        progress_reporter.report(&format!(
            "📦 Attempting to download the package archive of {}",
            package
        ));

        let bytes = self
            .registry
            .fetch_package_archive(package.name(), package.version())
            .await?;

        let Some(content) = PackageArchive::read_nuspec(&bytes, package.name())? else {
            progress_reporter.report_error(&format!(
                "⚠️  Warning: {}.nuspec was not found in NuGet package: {}",
                package.name(),
                package.name()
            ));
            return Ok(None);
        };

        Ok(Some(NuspecParser::parse(&content)?))
    }
}

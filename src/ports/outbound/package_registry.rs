use crate::shared::Result;
use async_trait::async_trait;

/// PackageRegistry port for the remote NuGet endpoints
///
/// Both methods fail on any transport error or non-success status; the
/// caller decides how to fall back.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Downloads the `.nuspec` manifest of a package version
    async fn fetch_nuspec(&self, package_name: &str, version: &str) -> Result<String>;

    /// Downloads the complete `.nupkg` archive of a package version
    async fn fetch_package_archive(&self, package_name: &str, version: &str) -> Result<Vec<u8>>;
}

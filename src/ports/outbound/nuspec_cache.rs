use crate::shared::Result;

/// NuspecCache port for manifests already present on the local machine
///
/// This is the first lookup tier; a hit means no network request is made.
pub trait NuspecCache {
    /// Reads the cached `.nuspec` for a package version
    ///
    /// # Returns
    /// `None` on a cache miss
    fn read_cached_nuspec(&self, package_name: &str, version: &str) -> Result<Option<String>>;
}

use crate::ports::outbound::NuspecCache;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Environment variable NuGet uses to relocate the global packages folder
const NUGET_PACKAGES_ENV: &str = "NUGET_PACKAGES";

/// NuGetCacheReader adapter over the NuGet global packages folder
///
/// Manifests live at `<root>/<name>/<version>/<name>.nuspec`. The path built
/// from the name and version exactly as referenced is checked first, then the
/// lowercase layout that current NuGet clients write.
pub struct NuGetCacheReader {
    root: Option<PathBuf>,
}

impl NuGetCacheReader {
    /// Creates a reader over an explicit packages folder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Creates a reader over `$NUGET_PACKAGES`, or `<home>/.nuget/packages`
    ///
    /// When neither can be determined every lookup is a cache miss.
    pub fn from_environment() -> Self {
        let root = std::env::var_os(NUGET_PACKAGES_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".nuget").join("packages")));

        if root.is_none() {
            log::warn!("Could not determine the NuGet packages folder; local cache disabled");
        }

        Self { root }
    }

    /// Candidate manifest paths for a package version, most specific first
    pub fn nuspec_paths(&self, package_name: &str, version: &str) -> Vec<PathBuf> {
        let Some(root) = self.root.as_ref() else {
            return Vec::new();
        };

        let exact = Self::nuspec_path(root, package_name, version);
        let lowered = Self::nuspec_path(
            root,
            &package_name.to_lowercase(),
            &version.to_lowercase(),
        );

        if exact == lowered {
            vec![exact]
        } else {
            vec![exact, lowered]
        }
    }

    fn nuspec_path(root: &Path, package_name: &str, version: &str) -> PathBuf {
        root.join(package_name)
            .join(version)
            .join(format!("{}.nuspec", package_name))
    }
}

impl NuspecCache for NuGetCacheReader {
    fn read_cached_nuspec(&self, package_name: &str, version: &str) -> Result<Option<String>> {
        if package_name.is_empty() || version.is_empty() {
            return Ok(None);
        }

        for path in self.nuspec_paths(package_name, version) {
            log::debug!("Checking local cache: {}", path.display());
            if path.is_file() {
                return read_text_file(&path, "cached nuspec").map(Some);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_nuspec(root: &Path, dir_name: &str, version: &str, file_stem: &str, content: &str) {
        let dir = root.join(dir_name).join(version);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.nuspec", file_stem)), content).unwrap();
    }

    #[test]
    fn test_nuspec_paths() {
        let cache = NuGetCacheReader::new("/home/dev/.nuget/packages");
        let paths = cache.nuspec_paths("Newtonsoft.Json", "13.0.1");

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/home/dev/.nuget/packages/Newtonsoft.Json/13.0.1/Newtonsoft.Json.nuspec"),
                PathBuf::from("/home/dev/.nuget/packages/newtonsoft.json/13.0.1/newtonsoft.json.nuspec"),
            ]
        );
    }

    #[test]
    fn test_nuspec_paths_lowercase_name_single_candidate() {
        let cache = NuGetCacheReader::new("/cache");
        assert_eq!(cache.nuspec_paths("dapper", "2.1.24").len(), 1);
    }

    #[test]
    fn test_read_cached_nuspec_exact_layout() {
        let temp_dir = TempDir::new().unwrap();
        write_nuspec(temp_dir.path(), "Serilog", "3.1.1", "Serilog", "<package />");

        let cache = NuGetCacheReader::new(temp_dir.path());
        let content = cache.read_cached_nuspec("Serilog", "3.1.1").unwrap();

        assert_eq!(content.as_deref(), Some("<package />"));
    }

    #[test]
    fn test_read_cached_nuspec_lowercase_layout() {
        let temp_dir = TempDir::new().unwrap();
        write_nuspec(temp_dir.path(), "serilog", "3.1.1", "serilog", "<package />");

        let cache = NuGetCacheReader::new(temp_dir.path());
        let content = cache.read_cached_nuspec("Serilog", "3.1.1").unwrap();

        assert!(content.is_some());
    }

    #[test]
    fn test_read_cached_nuspec_miss() {
        let temp_dir = TempDir::new().unwrap();

        let cache = NuGetCacheReader::new(temp_dir.path());
        let content = cache.read_cached_nuspec("Serilog", "3.1.1").unwrap();

        assert!(content.is_none());
    }

    #[test]
    fn test_read_cached_nuspec_blank_version_is_miss() {
        let temp_dir = TempDir::new().unwrap();

        let cache = NuGetCacheReader::new(temp_dir.path());
        assert!(cache.read_cached_nuspec("Serilog", "").unwrap().is_none());
    }
}

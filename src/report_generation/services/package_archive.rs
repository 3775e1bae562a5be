use crate::shared::Result;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// PackageArchive - reads the manifest out of a downloaded `.nupkg`
///
/// A `.nupkg` is a zip archive with `<id>.nuspec` at its root.
pub struct PackageArchive;

impl PackageArchive {
    /// Returns the content of `<package_name>.nuspec`, or `None` if the
    /// archive has no such entry
    ///
    /// The exact entry name is tried first. Older packages were sometimes
    /// packed with a differently-cased id, so a case-insensitive match on
    /// root-level entries is the fallback.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a zip archive or the entry
    /// cannot be read as UTF-8
    pub fn read_nuspec(bytes: &[u8], package_name: &str) -> Result<Option<String>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| anyhow::anyhow!("Invalid package archive: {}", e))?;

        let entry_name = format!("{}.nuspec", package_name);
        let Some(found) = Self::find_entry(&archive, &entry_name) else {
            return Ok(None);
        };

        let mut entry = archive
            .by_name(&found)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", found, e))?;

        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", found, e))?;

        Ok(Some(content))
    }

    fn find_entry(archive: &ZipArchive<Cursor<&[u8]>>, entry_name: &str) -> Option<String> {
        if archive.file_names().any(|name| name == entry_name) {
            return Some(entry_name.to_string());
        }

        let lowered = entry_name.to_lowercase();
        archive
            .file_names()
            .find(|name| !name.contains('/') && name.to_lowercase() == lowered)
            .map(String::from)
    }
}

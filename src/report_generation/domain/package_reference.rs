use super::LicenseInfo;
use std::fmt;

/// PackageReference value object for a third-party package used by a project
///
/// Construction only knows the name and version. License fields are attached
/// afterwards through [`PackageReference::with_license`], which consumes the
/// reference and returns the enriched one.
///
/// Identity for de-duplication and filtering is the package name compared
/// case-insensitively; see [`PackageReference::identity_key`]. The derived
/// `PartialEq` is plain structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    name: String,
    version: String,
    license: LicenseInfo,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license: LicenseInfo::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn license(&self) -> &LicenseInfo {
        &self.license
    }

    pub fn license_type(&self) -> Option<&str> {
        self.license.license_type()
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license.license_url()
    }

    /// Returns this reference with its license fields replaced
    pub fn with_license(self, license: LicenseInfo) -> Self {
        Self { license, ..self }
    }

    /// Lowercased name used as the identity key
    pub fn identity_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.version)
    }
}

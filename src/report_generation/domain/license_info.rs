/// LicenseInfo value object holding the license fields of a package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseInfo {
    license_type: Option<String>,
    license_url: Option<String>,
}

impl LicenseInfo {
    pub fn new(license_type: Option<String>, license_url: Option<String>) -> Self {
        Self {
            license_type,
            license_url,
        }
    }

    pub fn license_type(&self) -> Option<&str> {
        self.license_type.as_deref()
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }

    /// True when neither a type nor a URL is known
    pub fn is_empty(&self) -> bool {
        self.license_type.is_none() && self.license_url.is_none()
    }
}

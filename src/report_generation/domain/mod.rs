pub mod license_info;
pub mod package_reference;

pub use license_info::LicenseInfo;
pub use package_reference::PackageReference;

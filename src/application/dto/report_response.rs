use crate::report_generation::domain::PackageReference;

/// ReportResponse - result of a report generation run
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Packages in report order: resolved references sorted by name,
    /// followed by any additional packages
    pub packages: Vec<PackageReference>,
    /// References for which some license data was found
    pub resolved_count: usize,
    /// References left without license data
    pub unresolved_count: usize,
}

impl ReportResponse {
    pub fn new(packages: Vec<PackageReference>, resolved_count: usize, unresolved_count: usize) -> Self {
        Self {
            packages,
            resolved_count,
            unresolved_count,
        }
    }
}

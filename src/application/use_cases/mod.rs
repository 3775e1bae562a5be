/// Use cases module containing application business logic orchestration
mod generate_report;
mod resolve_license;

pub use generate_report::GenerateReportUseCase;
pub use resolve_license::{LicenseResolver, LicenseSource};

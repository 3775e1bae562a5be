/// Data Transfer Objects for application layer
///
/// DTOs carry run parameters in and results out, keeping the domain layer
/// isolated from the CLI.
mod report_request;
mod report_response;

pub use report_request::{ReportRequest, ReportRequestBuilder, DEFAULT_OUTPUT_FILE};
pub use report_response::ReportResponse;

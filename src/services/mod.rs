pub mod report;

pub use report::{ReportRequest, ReportService};

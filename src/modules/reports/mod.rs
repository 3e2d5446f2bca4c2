pub mod controllers;
pub mod models;
pub mod services;

pub use models::TaxSummaryReport;
pub use services::ReportService;

mod tax_report;

pub use tax_report::{TaxBreakdown, TaxSummaryReport};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::invoices::models::{InvoiceTotals, InvoiceTotalsRequest};
use crate::modules::invoices::services::InvoiceCalculator;
use crate::modules::reports::models::TaxSummaryReport;

/// POST /reports/taxes body: the line items of every invoice in the period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxReportRequest {
    #[serde(default)]
    pub invoices: Vec<InvoiceTotalsRequest>,
}

/// Service for generating tax reports from invoice line items
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    calculator: InvoiceCalculator,
}

impl ReportService {
    pub fn new(calculator: InvoiceCalculator) -> Self {
        Self { calculator }
    }

    /// Generate a tax summary across invoices.
    ///
    /// Each invoice is aggregated and rounded on its own first, exactly as
    /// it would be persisted, then the stored figures are summed.
    ///
    /// # Errors
    /// Returns the first invalid line item encountered
    pub fn generate_tax_report(&self, request: &TaxReportRequest) -> Result<TaxSummaryReport> {
        info!("Generating tax report for {} invoices", request.invoices.len());

        let invoices = request
            .invoices
            .iter()
            .map(|invoice| self.calculator.aggregate_invoice(&invoice.line_items))
            .collect::<Result<Vec<InvoiceTotals>>>()?;

        let report = TaxSummaryReport::from_invoices(&invoices)?;

        if report.is_empty() {
            warn!("Empty tax report generated");
        } else {
            info!(
                "Tax report generated: {} components, total tax {}",
                report.taxes.len(),
                report.total_taxes()
            );
        }

        Ok(report)
    }
}

use tracing::info;

use crate::core::Result;
use crate::modules::invoices::models::{
    ComputeLineItemRequest, InvoiceSummary, InvoiceTotalsRequest, InvoiceTotalsResponse, LineItem,
    LineItemResponse, LineItemResult, RecomputeTotalsRequest,
};
use crate::modules::invoices::services::InvoiceCalculator;

/// Request-level invoice operations on top of the calculator
#[derive(Debug, Clone, Default)]
pub struct InvoiceService {
    calculator: InvoiceCalculator,
}

impl InvoiceService {
    pub fn new(calculator: InvoiceCalculator) -> Self {
        Self { calculator }
    }

    /// Rounded figures for a single line
    pub fn compute_line_item(&self, request: &ComputeLineItemRequest) -> Result<LineItemResult> {
        let result = self.calculator.compute_line_item(
            request.quantity,
            request.unit_rate,
            &request.tax_rates,
        )?;

        Ok(result.rounded(self.calculator.policy()))
    }

    /// Rounded per-line results and invoice summary
    pub fn calculate_totals(&self, request: &InvoiceTotalsRequest) -> Result<InvoiceTotalsResponse> {
        self.respond(&request.line_items)
    }

    /// Change one quantity and re-aggregate the whole invoice
    pub fn recompute_totals(&self, request: &RecomputeTotalsRequest) -> Result<InvoiceTotalsResponse> {
        let line_items = InvoiceCalculator::apply_quantity(
            &request.line_items,
            request.line_item_id,
            request.quantity,
        )?;

        self.respond(&line_items)
    }

    fn respond(&self, line_items: &[LineItem]) -> Result<InvoiceTotalsResponse> {
        let policy = self.calculator.policy();
        let results = self.calculator.line_results(line_items)?;
        let totals = self.calculator.aggregate_results(&results)?;
        let summary = InvoiceSummary::from_totals(&totals, policy);

        info!(
            line_count = line_items.len(),
            total_amount = %summary.total_amount,
            "Invoice totals calculated"
        );

        Ok(InvoiceTotalsResponse {
            line_items: line_items
                .iter()
                .zip(results)
                .map(|(item, result)| LineItemResponse {
                    id: item.id,
                    result: result.rounded(policy),
                })
                .collect(),
            totals: summary,
        })
    }
}

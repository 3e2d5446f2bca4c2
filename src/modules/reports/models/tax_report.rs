use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::amount::{checked_add, checked_sum};
use crate::core::Result;
use crate::modules::invoices::models::InvoiceTotals;

/// Tax collected across a set of invoices, one breakdown per component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummaryReport {
    /// Number of invoices aggregated
    pub invoice_count: usize,
    /// Sum of invoice subtotals
    pub subtotal: Decimal,
    /// Per-component breakdowns, sorted by component name
    pub taxes: Vec<TaxBreakdown>,
    /// Sum of invoice grand totals
    pub grand_total: Decimal,
}

/// Tax aggregation for one named component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Component name (e.g. "CGST")
    pub component: String,
    /// Total collected for this component
    pub total_amount: Decimal,
    /// Number of invoices that carried this component
    pub invoice_count: usize,
}

impl TaxSummaryReport {
    /// Aggregate invoice totals that were already rounded for persistence.
    ///
    /// Summing stored (rounded) figures keeps the report consistent with
    /// what each invoice shows.
    pub fn from_invoices(invoices: &[InvoiceTotals]) -> Result<Self> {
        let mut components: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();

        for totals in invoices {
            for (name, amount) in &totals.tax_totals {
                let entry = components.entry(name.as_str()).or_insert((Decimal::ZERO, 0));
                entry.0 = checked_add("Report tax total", entry.0, *amount)?;
                entry.1 += 1;
            }
        }

        Ok(Self {
            invoice_count: invoices.len(),
            subtotal: checked_sum("Report subtotal", invoices.iter().map(|t| t.subtotal))?,
            taxes: components
                .into_iter()
                .map(|(component, (total_amount, invoice_count))| TaxBreakdown {
                    component: component.to_string(),
                    total_amount,
                    invoice_count,
                })
                .collect(),
            grand_total: checked_sum("Report grand total", invoices.iter().map(|t| t.grand_total))?,
        })
    }

    /// Check if the report is empty (no invoices)
    pub fn is_empty(&self) -> bool {
        self.invoice_count == 0
    }

    /// Total tax across all components
    pub fn total_taxes(&self) -> Decimal {
        self.taxes.iter().map(|t| t.total_amount).sum()
    }

    pub fn component(&self, name: &str) -> Option<&TaxBreakdown> {
        self.taxes.iter().find(|t| t.component == name)
    }
}

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::amount::{checked_add, checked_mul, checked_sum, ensure_non_negative};
use crate::core::{AppError, Result, RoundingPolicy};
use crate::modules::invoices::models::{InvoiceTotals, LineItem, LineItemResult};
use crate::modules::taxes::{TaxCalculator, TaxRates};

/// Single source of truth for invoice figures.
///
/// All arithmetic runs at full decimal precision. The rounding policy is
/// applied exactly once, when `aggregate_invoice` or `recompute` return.
/// Amounts too large for a decimal are rejected as invalid input.
/// The calculator holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceCalculator {
    policy: RoundingPolicy,
    tax_calculator: TaxCalculator,
}

impl InvoiceCalculator {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self {
            policy,
            tax_calculator: TaxCalculator::new(),
        }
    }

    pub fn policy(&self) -> &RoundingPolicy {
        &self.policy
    }

    /// Figures for one line, unrounded
    pub fn compute_line_item(
        &self,
        quantity: Decimal,
        unit_rate: Decimal,
        tax_rates: &TaxRates,
    ) -> Result<LineItemResult> {
        ensure_non_negative("Quantity", quantity)?;
        ensure_non_negative("Unit rate", unit_rate)?;

        let line_subtotal = checked_mul("Line subtotal", quantity, unit_rate)?;
        let tax_amounts = self.tax_calculator.calculate_taxes(line_subtotal, tax_rates)?;
        let line_tax = checked_sum("Line tax", tax_amounts.values().copied())?;
        let line_total = checked_add("Line total", line_subtotal, line_tax)?;

        Ok(LineItemResult {
            line_subtotal,
            tax_amounts,
            line_total,
        })
    }

    pub fn compute(&self, item: &LineItem) -> Result<LineItemResult> {
        self.compute_line_item(item.quantity(), item.unit_rate(), item.tax_rates())
    }

    /// Unrounded results for every line, in input order.
    ///
    /// Line ids must be unique within the list.
    pub fn line_results(&self, line_items: &[LineItem]) -> Result<Vec<LineItemResult>> {
        Self::ensure_unique_ids(line_items)?;
        line_items.iter().map(|item| self.compute(item)).collect()
    }

    /// Invoice totals at full precision
    pub fn aggregate_exact(&self, line_items: &[LineItem]) -> Result<InvoiceTotals> {
        self.aggregate_results(&self.line_results(line_items)?)
    }

    /// Sum already computed line results at full precision
    pub fn aggregate_results(&self, results: &[LineItemResult]) -> Result<InvoiceTotals> {
        let mut totals = InvoiceTotals::zero();

        for result in results {
            totals.subtotal = checked_add("Invoice subtotal", totals.subtotal, result.line_subtotal)?;
            for (name, amount) in &result.tax_amounts {
                let total = totals.tax_totals.entry(name.clone()).or_insert(Decimal::ZERO);
                *total = checked_add("Invoice tax total", *total, *amount)?;
            }
        }

        let tax_total = checked_sum("Invoice tax total", totals.tax_totals.values().copied())?;
        totals.grand_total = checked_add("Invoice grand total", totals.subtotal, tax_total)?;
        Ok(totals)
    }

    /// Invoice totals rounded once with the configured policy.
    ///
    /// An empty slice yields zero totals with no tax components.
    pub fn aggregate_invoice(&self, line_items: &[LineItem]) -> Result<InvoiceTotals> {
        let totals = self.aggregate_exact(line_items)?.rounded(&self.policy);

        debug!(
            line_count = line_items.len(),
            components = totals.tax_totals.len(),
            subtotal = %totals.subtotal,
            grand_total = %totals.grand_total,
            "Aggregated invoice"
        );

        Ok(totals)
    }

    /// Totals after changing one line's quantity.
    ///
    /// The whole set is re-aggregated from scratch; `existing` is only
    /// compared against for diagnostics.
    pub fn recompute(
        &self,
        existing: &InvoiceTotals,
        line_items: &[LineItem],
        changed_item: Uuid,
        new_quantity: Decimal,
    ) -> Result<InvoiceTotals> {
        let updated = Self::apply_quantity(line_items, changed_item, new_quantity)?;
        let totals = self.aggregate_invoice(&updated)?;

        debug!(
            line_item_id = %changed_item,
            quantity = %new_quantity,
            previous_grand_total = %existing.grand_total,
            grand_total = %totals.grand_total,
            "Recomputed invoice totals"
        );

        Ok(totals)
    }

    /// Copy of `line_items` with one row's quantity replaced
    pub fn apply_quantity(
        line_items: &[LineItem],
        changed_item: Uuid,
        new_quantity: Decimal,
    ) -> Result<Vec<LineItem>> {
        ensure_non_negative("Quantity", new_quantity)?;
        Self::ensure_unique_ids(line_items)?;

        let index = line_items
            .iter()
            .position(|item| item.id == changed_item)
            .ok_or_else(|| {
                warn!(line_item_id = %changed_item, "Recompute requested for unknown line item");
                AppError::not_found(format!("Line item {}", changed_item))
            })?;

        let mut updated = line_items.to_vec();
        updated[index].set_quantity(new_quantity)?;
        Ok(updated)
    }

    fn ensure_unique_ids(line_items: &[LineItem]) -> Result<()> {
        let mut seen = HashSet::with_capacity(line_items.len());

        for item in line_items {
            if !seen.insert(item.id) {
                warn!(line_item_id = %item.id, "Duplicate line item id");
                return Err(AppError::validation(format!(
                    "Line item {} appears more than once",
                    item.id
                )));
            }
        }

        Ok(())
    }
}

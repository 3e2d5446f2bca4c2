use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CatalogItem, InvoiceTotals, LineItem, LineItemResult};
use crate::core::{AppError, Result};
use crate::modules::invoices::services::InvoiceCalculator;

/// Invoice being composed: one ordered list of rows, quantity kept on
/// each row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    line_items: Vec<LineItem>,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    /// Add a catalog item with quantity 1 and return the new row id.
    ///
    /// A catalog item appears at most once; change its quantity instead.
    pub fn add_item(&mut self, catalog_item: &CatalogItem) -> Result<Uuid> {
        if self
            .line_items
            .iter()
            .any(|item| item.item_id.as_deref() == Some(catalog_item.id.as_str()))
        {
            return Err(AppError::validation(format!(
                "Catalog item {} is already on the invoice",
                catalog_item.id
            )));
        }

        let line_item = LineItem::from_catalog(catalog_item)?;
        let id = line_item.id;
        self.line_items.push(line_item);
        Ok(id)
    }

    pub fn set_quantity(&mut self, id: Uuid, quantity: Decimal) -> Result<()> {
        self.find_mut(id)?.set_quantity(quantity)
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<LineItem> {
        let index = self
            .line_items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("Line item {}", id)))?;

        Ok(self.line_items.remove(index))
    }

    /// Per-row results rounded for display
    pub fn line_results(&self, calculator: &InvoiceCalculator) -> Result<Vec<LineItemResult>> {
        Ok(calculator
            .line_results(&self.line_items)?
            .iter()
            .map(|result| result.rounded(calculator.policy()))
            .collect())
    }

    pub fn totals(&self, calculator: &InvoiceCalculator) -> Result<InvoiceTotals> {
        calculator.aggregate_invoice(&self.line_items)
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut LineItem> {
        self.line_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("Line item {}", id)))
    }
}

// LineItem: one billable row on an invoice draft.
//
// Rate and tax rates are snapshotted from the catalog when the row is
// created; only the quantity changes afterwards. No total is stored on the
// row, every figure is derived by the calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog_item::CatalogItem;
use crate::core::amount::{decimal_from_f64, ensure_non_negative};
use crate::core::{Result, RoundingPolicy};
use crate::modules::taxes::{TaxCalculator, TaxRates};

/// Represents a single line item on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line identifier within the draft
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Catalog item this row was created from
    #[serde(default)]
    pub item_id: Option<String>,

    /// Description of the product or service
    #[serde(default)]
    pub description: String,

    /// HSN classification code (opaque)
    #[serde(default)]
    pub hsn_code: Option<String>,

    /// Quantity, may be fractional
    quantity: Decimal,

    /// Price per unit
    unit_rate: Decimal,

    /// Named tax components in percent
    #[serde(default)]
    tax_rates: TaxRates,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product/service description
    /// * `quantity` - Must be non-negative
    /// * `unit_rate` - Must be non-negative
    /// * `tax_rates` - Each component must be non-negative
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
        tax_rates: TaxRates,
    ) -> Result<Self> {
        ensure_non_negative("Quantity", quantity)?;
        ensure_non_negative("Unit rate", unit_rate)?;
        TaxCalculator::new().validate_tax_rates(&tax_rates)?;

        Ok(Self {
            id: Uuid::new_v4(),
            item_id: None,
            description: description.into(),
            hsn_code: None,
            quantity,
            unit_rate,
            tax_rates,
        })
    }

    /// Same as [`LineItem::new`] but from float inputs, tax rates given as
    /// `(name, percent)` pairs. NaN and infinities are rejected instead of
    /// becoming zero.
    pub fn from_f64(
        description: impl Into<String>,
        quantity: f64,
        unit_rate: f64,
        tax_rates: &[(&str, f64)],
    ) -> Result<Self> {
        let quantity = decimal_from_f64("Quantity", quantity)?;
        let unit_rate = decimal_from_f64("Unit rate", unit_rate)?;
        let tax_rates = TaxRates::from_f64_pairs(tax_rates.iter().copied())?;
        Self::new(description, quantity, unit_rate, tax_rates)
    }

    /// Snapshot a catalog item onto a new row with quantity 1
    pub fn from_catalog(item: &CatalogItem) -> Result<Self> {
        item.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            item_id: Some(item.id.clone()),
            description: item.name.clone(),
            hsn_code: item.hsn_code.clone(),
            quantity: Decimal::ONE,
            unit_rate: item.unit_rate,
            tax_rates: item.tax_rates.clone(),
        })
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_rate(&self) -> Decimal {
        self.unit_rate
    }

    pub fn tax_rates(&self) -> &TaxRates {
        &self.tax_rates
    }

    /// Change the quantity, the only mutable figure on a row
    pub fn set_quantity(&mut self, quantity: Decimal) -> Result<()> {
        self.quantity = ensure_non_negative("Quantity", quantity)?;
        Ok(())
    }
}

/// Derived figures for one line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemResult {
    /// quantity × unit_rate
    pub line_subtotal: Decimal,

    /// line_subtotal × rate / 100, per component
    pub tax_amounts: BTreeMap<String, Decimal>,

    /// line_subtotal + all tax amounts
    pub line_total: Decimal,
}

impl LineItemResult {
    pub fn tax_total(&self) -> Decimal {
        self.tax_amounts.values().copied().sum()
    }

    /// Display copy of this result; each figure rounded independently
    pub fn rounded(&self, policy: &RoundingPolicy) -> Self {
        Self {
            line_subtotal: policy.round(self.line_subtotal),
            tax_amounts: self
                .tax_amounts
                .iter()
                .map(|(name, amount)| (name.clone(), policy.round(*amount)))
                .collect(),
            line_total: policy.round(self.line_total),
        }
    }
}

// Catalog record as resolved by the inventory lookup. Line items snapshot
// the rate and tax rates from here when added to a draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::amount::ensure_non_negative;
use crate::core::{AppError, Result};
use crate::modules::taxes::{TaxCalculator, TaxRates};

/// A selectable inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Inventory identifier
    pub id: String,

    /// Display name, copied to the line description
    pub name: String,

    /// HSN classification code, passed through untouched
    #[serde(default)]
    pub hsn_code: Option<String>,

    /// Price per unit
    pub unit_rate: Decimal,

    /// Tax components for this item's classification
    #[serde(default)]
    pub tax_rates: TaxRates,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_rate: Decimal,
        tax_rates: TaxRates,
    ) -> Result<Self> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            hsn_code: None,
            unit_rate,
            tax_rates,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn with_hsn_code(mut self, hsn_code: impl Into<String>) -> Self {
        self.hsn_code = Some(hsn_code.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::validation("Catalog item id cannot be empty"));
        }

        if self.name.trim().is_empty() {
            return Err(AppError::validation("Catalog item name cannot be empty"));
        }

        ensure_non_negative("Unit rate", self.unit_rate)?;
        TaxCalculator::new().validate_tax_rates(&self.tax_rates)
    }
}

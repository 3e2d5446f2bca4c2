// Request/response bodies for the invoice endpoints

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{InvoiceSummary, LineItem, LineItemResult};
use crate::modules::taxes::TaxRates;

/// POST /invoices/line-items/compute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeLineItemRequest {
    pub quantity: Decimal,
    pub unit_rate: Decimal,
    #[serde(default)]
    pub tax_rates: TaxRates,
}

/// POST /invoices/totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceTotalsRequest {
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// POST /invoices/totals/recompute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeTotalsRequest {
    pub line_items: Vec<LineItem>,
    pub line_item_id: Uuid,
    pub quantity: Decimal,
}

/// Rounded figures for one row, keyed by its line id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: LineItemResult,
}

/// Rounded per-row results plus the invoice summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceTotalsResponse {
    pub line_items: Vec<LineItemResponse>,
    pub totals: InvoiceSummary,
}

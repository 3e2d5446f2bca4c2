// Invoice-level aggregates.
//
// InvoiceTotals is a pure function of the current line items and has no
// lifecycle of its own. InvoiceSummary is the rounded shape written to the
// invoice's persisted summary fields.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::RoundingPolicy;
use crate::modules::taxes::{CGST, SGST};

/// Aggregate of all line items on one invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line subtotals, before tax
    pub subtotal: Decimal,

    /// One entry per tax component name seen on any line
    pub tax_totals: BTreeMap<String, Decimal>,

    /// subtotal + every tax total
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    /// Totals of an invoice with no line items
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn tax_total(&self) -> Decimal {
        self.tax_totals.values().copied().sum()
    }

    /// Total for one component; zero when no line declares it
    pub fn component(&self, name: &str) -> Decimal {
        self.tax_totals.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    /// Round every figure once for display or persistence.
    ///
    /// The grand total is rounded from its full-precision value, so it can
    /// differ by a fraction of the smallest unit from the sum of the rounded
    /// parts.
    pub fn rounded(&self, policy: &RoundingPolicy) -> Self {
        Self {
            subtotal: policy.round(self.subtotal),
            tax_totals: self
                .tax_totals
                .iter()
                .map(|(name, amount)| (name.clone(), policy.round(*amount)))
                .collect(),
            grand_total: policy.round(self.grand_total),
        }
    }
}

/// Persisted invoice summary.
///
/// Keeps the open component map; `cgst_total`/`sgst_total` serve the
/// two-column GST storage schema.
///
/// Every field is rounded from its own full-precision value, so
/// `subtotal + cgst_total + sgst_total` can differ from `total_amount` by up
/// to half a smallest unit per column. Store `total_amount` as given; do not
/// re-add the columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub subtotal: Decimal,
    pub tax_totals: BTreeMap<String, Decimal>,
    pub total_amount: Decimal,
}

impl InvoiceSummary {
    /// Build from totals, rounding with the given policy
    pub fn from_totals(totals: &InvoiceTotals, policy: &RoundingPolicy) -> Self {
        let rounded = totals.rounded(policy);
        Self {
            subtotal: rounded.subtotal,
            tax_totals: rounded.tax_totals,
            total_amount: rounded.grand_total,
        }
    }

    pub fn cgst_total(&self) -> Decimal {
        self.tax_totals.get(CGST).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn sgst_total(&self) -> Decimal {
        self.tax_totals.get(SGST).copied().unwrap_or(Decimal::ZERO)
    }

    /// Components other than CGST/SGST, which the two-column schema cannot hold
    pub fn other_components(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.tax_totals
            .iter()
            .filter(|(name, _)| name.as_str() != CGST && name.as_str() != SGST)
            .map(|(name, amount)| (name.as_str(), *amount))
    }
}

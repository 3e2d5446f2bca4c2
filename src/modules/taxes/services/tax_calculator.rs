use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::amount::{ensure_non_negative, percent_of};
use crate::core::error::AppError;
use crate::modules::taxes::models::TaxRates;

/// TaxCalculator handles per-line-item tax calculations.
///
/// Rates are percentages (9 means 9%). Results are returned at full
/// precision; rounding is the caller's last step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Tax amount for one component: subtotal × rate / 100
    pub fn calculate_tax(&self, subtotal: Decimal, rate_percent: Decimal) -> Result<Decimal, AppError> {
        self.validate_tax_rate("Tax rate", rate_percent)?;

        percent_of("Tax amount", subtotal, rate_percent)
    }

    /// Tax amount for every named component declared on the line
    pub fn calculate_taxes(
        &self,
        subtotal: Decimal,
        tax_rates: &TaxRates,
    ) -> Result<BTreeMap<String, Decimal>, AppError> {
        self.validate_tax_rates(tax_rates)?;

        tax_rates
            .iter()
            .map(|(name, rate)| {
                let amount = percent_of(&format!("Tax amount {}", name), subtotal, rate)?;
                Ok((name.to_string(), amount))
            })
            .collect()
    }

    /// Each component percentage must be >= 0. No upper bound: cess
    /// components on some goods exceed 100%.
    pub fn validate_tax_rate(&self, name: &str, rate_percent: Decimal) -> Result<(), AppError> {
        ensure_non_negative(name, rate_percent).map(|_| ())
    }

    pub fn validate_tax_rates(&self, tax_rates: &TaxRates) -> Result<(), AppError> {
        for (name, rate) in tax_rates.iter() {
            self.validate_tax_rate(&format!("Tax rate {}", name), rate)?;
        }
        Ok(())
    }
}

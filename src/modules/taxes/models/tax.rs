use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::amount::decimal_from_f64;
use crate::core::Result;

/// Central GST component name
pub const CGST: &str = "CGST";
/// State GST component name
pub const SGST: &str = "SGST";

/// Named tax components for one line item, as percentages.
///
/// Serialized as a plain JSON object: `{"CGST": "9", "SGST": "9"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRates(BTreeMap<String, Decimal>);

impl TaxRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single named component
    pub fn single(name: impl Into<String>, rate: Decimal) -> Self {
        let mut rates = Self::new();
        rates.insert(name, rate);
        rates
    }

    /// Indian GST split evenly between CGST and SGST (18% -> 9% + 9%)
    pub fn gst(total_percent: Decimal) -> Self {
        let half = total_percent / Decimal::TWO;
        let mut rates = Self::new();
        rates.insert(CGST, half);
        rates.insert(SGST, half);
        rates
    }

    /// Build from float percentages, rejecting NaN, infinities and negatives
    pub fn from_f64_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut rates = Self::new();
        for (name, rate) in pairs {
            let rate = decimal_from_f64(&format!("Tax rate {}", name), rate)?;
            rates.insert(name, rate);
        }
        Ok(rates)
    }

    /// Add or replace a component
    pub fn insert(&mut self, name: impl Into<String>, rate: Decimal) -> Option<Decimal> {
        self.0.insert(name.into(), rate)
    }

    pub fn with(mut self, name: impl Into<String>, rate: Decimal) -> Self {
        self.insert(name, rate);
        self
    }

    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for TaxRates {
    fn from_iter<T: IntoIterator<Item = (S, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, rate)| (name.into(), rate)).collect())
    }
}

// Taxes module

pub mod models;
pub mod services;

pub use models::{TaxRates, CGST, SGST};
pub use services::TaxCalculator;

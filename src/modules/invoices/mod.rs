// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    CatalogItem, InvoiceDraft, InvoiceSummary, InvoiceTotals, LineItem, LineItemResult,
};
pub use services::{InvoiceCalculator, InvoiceService};

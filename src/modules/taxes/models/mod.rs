mod tax;

pub use tax::{TaxRates, CGST, SGST};

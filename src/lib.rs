//! Invoice financial computation for the Odoo Hub back office.
//!
//! Line-item tax and total calculation, invoice aggregation with a single
//! rounding step, and a thin actix-web adapter exposing both.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use std::sync::Arc;

use actix_web::web;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::reports;
pub use modules::taxes;

use modules::invoices::services::{InvoiceCalculator, InvoiceService};
use modules::reports::services::ReportService;

/// Register shared services and every route on an actix `App`
pub fn configure(calculator: InvoiceCalculator) -> impl Fn(&mut web::ServiceConfig) + Clone {
    let invoice_service = Arc::new(InvoiceService::new(calculator));
    let report_service = Arc::new(ReportService::new(calculator));

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(invoice_service.clone()))
            .app_data(web::Data::new(report_service.clone()))
            .app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
            .configure(modules::health::controllers::configure)
            .configure(modules::invoices::controllers::configure)
            .configure(modules::reports::controllers::configure);
    }
}

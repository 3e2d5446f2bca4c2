use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::models::{
    ComputeLineItemRequest, InvoiceTotalsRequest, RecomputeTotalsRequest,
};
use crate::modules::invoices::services::InvoiceService;

/// Compute one line item
/// POST /invoices/line-items/compute
pub async fn compute_line_item(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<ComputeLineItemRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service.compute_line_item(&request)?;

    Ok(HttpResponse::Ok().json(result))
}

/// Totals for a full set of line items
/// POST /invoices/totals
pub async fn calculate_totals(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<InvoiceTotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate_totals(&request)?;

    Ok(HttpResponse::Ok().json(response))
}

/// Totals after a quantity change
/// POST /invoices/totals/recompute
pub async fn recompute_totals(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<RecomputeTotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.recompute_totals(&request)?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("/line-items/compute", web::post().to(compute_line_item))
            .route("/totals", web::post().to(calculate_totals))
            .route("/totals/recompute", web::post().to(recompute_totals)),
    );
}

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::reports::services::{ReportService, TaxReportRequest};

/// Tax summary across invoices
/// POST /reports/taxes
pub async fn tax_report(
    service: web::Data<Arc<ReportService>>,
    request: web::Json<TaxReportRequest>,
) -> Result<HttpResponse> {
    let report = service.generate_tax_report(&request)?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure report routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/taxes", web::post().to(tax_report)));
}

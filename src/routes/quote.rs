use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::models::catalog::Catalog;
use crate::models::quote::{QuoteSummary, Selection};
use crate::services::quote_service::{QuoteCalculator, MAX_EXTRA_HOURS};

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: Option<QuoteSummary>,
}

// POST /api/quote
//
// Live pricing for the booking form: called on every form change, so a
// selection without a package answers {"quote": null} rather than an
// HTTP error.
pub async fn calculate_quote(
    catalog: web::Data<Arc<Catalog>>,
    input: web::Json<Selection>,
) -> impl Responder {
    let mut selection = input.into_inner();
    // The form slider stops at the cap; clamp here too so a hand-built
    // request can't book past it.
    selection.extra_hours = selection.extra_hours.min(MAX_EXTRA_HOURS);

    let quote = QuoteCalculator::calculate(&catalog, &selection);
    HttpResponse::Ok().json(QuoteResponse { quote })
}

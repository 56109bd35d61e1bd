use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::models::catalog::Catalog;
use crate::models::enquiry::{BookingEnquiry, EnquiryInput};
use crate::models::quote::QuoteSummary;
use crate::services::email_service::{build_client_email, build_owner_email, EmailService};
use crate::services::quote_service::{QuoteCalculator, MAX_EXTRA_HOURS};

// Each boundary call must settle within this; past it the submission
// counts as failed and the visitor is asked to retry.
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BOOKINGS_INBOX: &str = "bookings@theknightlyphotobooth.com";
const DEFAULT_FROM_EMAIL: &str = "noreply@theknightlyphotobooth.com";

// Whatever failed behind the scenes, the visitor only ever sees this.
const SUBMIT_FAILED_MESSAGE: &str = "We couldn't submit your enquiry. Please try again.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EnquiryResponse {
    pub id: String,
    pub quote: QuoteSummary,
}

// POST /api/enquiries
//
// Finalizes a selection: computes the quote, then dispatches the owner
// notification, the requester acknowledgment, and the enquiry record
// concurrently. All three must succeed; any failure is reported as one
// generic retry message, never a partial success.
pub async fn submit_enquiry(
    data: web::Data<Arc<Client>>,
    catalog: web::Data<Arc<Catalog>>,
    input: web::Json<EnquiryInput>,
) -> impl Responder {
    let client = data.into_inner();
    let mut input = input.into_inner();
    input.selection.extra_hours = input.selection.extra_hours.min(MAX_EXTRA_HOURS);

    let event_date = match input.event_date {
        Some(date) => date,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "missing_event_date".to_string(),
                message: "Pick an event date before submitting your enquiry".to_string(),
            });
        }
    };

    let package = match input
        .selection
        .selected_package
        .and_then(|id| catalog.find_package(id))
    {
        Some(package) => package,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "incomplete_selection".to_string(),
                message: "Select a package before submitting your enquiry".to_string(),
            });
        }
    };

    let quote = match QuoteCalculator::calculate(&catalog, &input.selection) {
        Some(quote) => quote,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "incomplete_selection".to_string(),
                message: "Select a package before submitting your enquiry".to_string(),
            });
        }
    };

    let email_service = match EmailService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to initialize email service: {:?}", err);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "service_error".to_string(),
                message: SUBMIT_FAILED_MESSAGE.to_string(),
            });
        }
    };

    let owner_inbox =
        std::env::var("BOOKINGS_INBOX").unwrap_or_else(|_| DEFAULT_BOOKINGS_INBOX.to_string());
    let from_email =
        std::env::var("FROM_EMAIL").unwrap_or_else(|_| DEFAULT_FROM_EMAIL.to_string());

    let owner_msg = build_owner_email(&owner_inbox, &input, package, &quote);
    let client_msg = build_client_email(&input, package, &quote);

    let enquiry = BookingEnquiry {
        id: None,
        name: input.name.clone(),
        email_address: input.email_address.clone(),
        event_type: input.event_type.clone(),
        event_date,
        selected_package: package.id,
        extra_hours: input.selection.extra_hours,
        add_ons: input.selection.add_ons.clone(),
        quote: quote.clone(),
        created_at: Utc::now(),
    };

    let collection: mongodb::Collection<BookingEnquiry> =
        client.database("Photobooth").collection("Enquiries");

    // The three boundary operations are independent; run them together
    // and wait for all of them to settle before answering.
    let (owner_sent, client_sent, saved) = futures::join!(
        timeout(
            DISPATCH_TIMEOUT,
            email_service.send_email(
                &owner_msg.to,
                &from_email,
                &owner_msg.subject,
                &owner_msg.body
            )
        ),
        timeout(
            DISPATCH_TIMEOUT,
            email_service.send_email(
                &client_msg.to,
                &from_email,
                &client_msg.subject,
                &client_msg.body
            )
        ),
        timeout(DISPATCH_TIMEOUT, collection.insert_one(&enquiry)),
    );

    let mut failed = false;

    match owner_sent {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("Owner notification failed: {}", err);
            failed = true;
        }
        Err(_) => {
            eprintln!("Owner notification timed out");
            failed = true;
        }
    }

    match client_sent {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("Requester acknowledgment failed: {}", err);
            failed = true;
        }
        Err(_) => {
            eprintln!("Requester acknowledgment timed out");
            failed = true;
        }
    }

    let inserted_id = match saved {
        Ok(Ok(result)) => result.inserted_id.as_object_id(),
        Ok(Err(err)) => {
            eprintln!("Failed to save enquiry: {}", err);
            failed = true;
            None
        }
        Err(_) => {
            eprintln!("Saving enquiry timed out");
            failed = true;
            None
        }
    };

    if failed {
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "submission_failed".to_string(),
            message: SUBMIT_FAILED_MESSAGE.to_string(),
        });
    }

    HttpResponse::Created().json(EnquiryResponse {
        id: inserted_id.map(|id| id.to_hex()).unwrap_or_default(),
        quote,
    })
}

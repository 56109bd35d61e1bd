use reqwest;
use serde::{Deserialize, Serialize};
use std::env;

use crate::models::catalog::Package;
use crate::models::enquiry::EnquiryInput;
use crate::models::quote::QuoteSummary;
use crate::services::currency::format_currency;

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridEmail {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridPersonalization {
    pub to: Vec<SendGridEmail>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridRequest {
    pub personalizations: Vec<SendGridPersonalization>,
    pub from: SendGridEmail,
    pub subject: String,
    pub content: Vec<SendGridContent>,
}

#[derive(Debug)]
pub enum EmailError {
    EnvironmentError(String),
    RequestError(String),
    ApiError(String),
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::EnvironmentError(err) => write!(f, "Environment error: {}", err),
            EmailError::RequestError(err) => write!(f, "Request error: {}", err),
            EmailError::ApiError(err) => write!(f, "API error: {}", err),
        }
    }
}

impl std::error::Error for EmailError {}

/// A fully rendered notification: recipient, subject, plain-text body.
/// Built by the pure builders below, dispatched by `EmailService`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct EmailService {
    api_key: String,
    client: reqwest::Client,
}

impl EmailService {
    pub fn new() -> Result<Self, EmailError> {
        let api_key = env::var("SENDGRID_API_KEY")
            .map_err(|_| EmailError::EnvironmentError("SENDGRID_API_KEY not set".to_string()))?;

        let client = reqwest::Client::new();

        Ok(Self { api_key, client })
    }

    pub async fn send_email(
        &self,
        to_email: &str,
        from_email: &str,
        subject: &str,
        content: &str,
    ) -> Result<(), EmailError> {
        let url = "https://api.sendgrid.com/v3/mail/send";

        let request = SendGridRequest {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridEmail {
                    email: to_email.to_string(),
                }],
            }],
            from: SendGridEmail {
                email: from_email.to_string(),
            },
            subject: subject.to_string(),
            content: vec![SendGridContent {
                content_type: "text/plain".to_string(),
                value: content.to_string(),
            }],
        };

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::RequestError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(EmailError::ApiError(format!(
                "Status: {}, Body: {}",
                status, body
            )))
        }
    }
}

fn format_event_date(input: &EnquiryInput) -> String {
    input
        .event_date
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}

/// Itemized enquiry notification for the booth owner's inbox.
pub fn build_owner_email(
    to: &str,
    input: &EnquiryInput,
    package: &Package,
    quote: &QuoteSummary,
) -> EmailMessage {
    let add_ons_list = if quote.add_ons.is_empty() {
        "None selected".to_string()
    } else {
        quote
            .add_ons
            .iter()
            .map(|line| format!("- {}: {}", line.name, format_currency(line.price, true)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let discount_line = if quote.add_ons_discount > 0.0 {
        format!(
            "Add-Ons Subtotal: {}\nAdd-Ons Discount: -{}\n",
            format_currency(quote.add_ons_total, true),
            format_currency(quote.add_ons_discount, true)
        )
    } else {
        String::new()
    };

    let body = format!(
        "\nNew booking enquiry details:\n\n\
         Name: {}\n\
         Email: {}\n\
         Event Type: {}\n\
         Event Date: {}\n\n\
         Selected Package: {} ({})\n\
         Base Hours: {}\n\
         Extra Hours: {} ({})\n\n\
         Add-Ons:\n{}\n{}\n\
         Total Quote: {}\n",
        input.name,
        input.email_address,
        input.event_type,
        format_event_date(input),
        package.name,
        format_currency(package.price, true),
        package.hours,
        quote.extra_hours_count,
        format_currency(quote.extra_hours_price, true),
        add_ons_list,
        discount_line,
        format_currency(quote.final_total, true),
    );

    EmailMessage {
        to: to.to_string(),
        subject: format!("New Booking Enquiry from {}", input.name),
        body,
    }
}

/// Friendly acknowledgment for the person who submitted the enquiry.
pub fn build_client_email(
    input: &EnquiryInput,
    package: &Package,
    quote: &QuoteSummary,
) -> EmailMessage {
    let add_ons_list = if quote.add_ons.is_empty() {
        "None".to_string()
    } else {
        quote
            .add_ons
            .iter()
            .map(|line| line.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let body = format!(
        "\nHi {},\n\n\
         Thank you for submitting your booking enquiry for your {} on {}.\n\n\
         Here's a summary of your request:\n\
         Package: {}\n\
         Base Hours: {}\n\
         Extra Hours: {}\n\
         Add-Ons: {}\n\
         Estimated Total Quote: {}\n\n\
         We'll be in touch soon to confirm everything!\n\n\
         – The Knightly Photobooth Team\n",
        input.name,
        input.event_type,
        format_event_date(input),
        package.name,
        package.hours,
        quote.extra_hours_count,
        add_ons_list,
        format_currency(quote.final_total, true),
    );

    EmailMessage {
        to: input.email_address.clone(),
        subject: "Thanks for your booking enquiry!".to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Catalog, PackageId};
    use crate::models::quote::Selection;
    use crate::services::quote_service::QuoteCalculator;
    use chrono::NaiveDate;

    fn sample_input() -> EnquiryInput {
        EnquiryInput {
            name: "Morgan Reyes".to_string(),
            email_address: "morgan@example.com".to_string(),
            event_type: "Wedding".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12),
            selection: Selection {
                selected_package: Some(PackageId::Ultimate),
                extra_hours: 0,
                add_ons: vec![
                    "usb-drive".to_string(),
                    "premium-backdrop".to_string(),
                    "boomerangs".to_string(),
                ],
            },
        }
    }

    #[test]
    fn owner_email_is_fully_itemized() {
        let catalog = Catalog::standard();
        let input = sample_input();
        let package = catalog.find_package(PackageId::Ultimate).unwrap();
        let quote = QuoteCalculator::calculate(&catalog, &input.selection).unwrap();

        let msg = build_owner_email("bookings@example.com", &input, package, &quote);

        assert_eq!(msg.to, "bookings@example.com");
        assert_eq!(msg.subject, "New Booking Enquiry from Morgan Reyes");
        assert!(msg.body.contains("Name: Morgan Reyes"));
        assert!(msg.body.contains("Email: morgan@example.com"));
        assert!(msg.body.contains("Event Date: September 12, 2026"));
        assert!(msg.body.contains("Selected Package: Ultimate Package ($799.00)"));
        assert!(msg.body.contains("- USB Thumb Drive: $59.00"));
        assert!(msg.body.contains("- Premium Backdrop: $149.00"));
        assert!(msg.body.contains("- Boomerangs & GIFs: $69.00"));
        assert!(msg.body.contains("Add-Ons Discount: -$41.55"));
        assert!(msg.body.contains("Total Quote: $1,034.45"));
    }

    #[test]
    fn owner_email_without_add_ons() {
        let catalog = Catalog::standard();
        let mut input = sample_input();
        input.selection.add_ons.clear();
        let package = catalog.find_package(PackageId::Ultimate).unwrap();
        let quote = QuoteCalculator::calculate(&catalog, &input.selection).unwrap();

        let msg = build_owner_email("bookings@example.com", &input, package, &quote);

        assert!(msg.body.contains("None selected"));
        assert!(!msg.body.contains("Add-Ons Discount"));
        assert!(msg.body.contains("Total Quote: $799.00"));
    }

    #[test]
    fn client_email_is_a_friendly_summary() {
        let catalog = Catalog::standard();
        let input = sample_input();
        let package = catalog.find_package(PackageId::Ultimate).unwrap();
        let quote = QuoteCalculator::calculate(&catalog, &input.selection).unwrap();

        let msg = build_client_email(&input, package, &quote);

        assert_eq!(msg.to, "morgan@example.com");
        assert_eq!(msg.subject, "Thanks for your booking enquiry!");
        assert!(msg.body.contains("Hi Morgan Reyes,"));
        assert!(msg.body.contains("your Wedding on September 12, 2026"));
        assert!(msg.body.contains("Package: Ultimate Package"));
        assert!(msg.body.contains("Base Hours: 1-4 Hours"));
        assert!(msg
            .body
            .contains("Add-Ons: USB Thumb Drive, Premium Backdrop, Boomerangs & GIFs"));
        assert!(msg.body.contains("Estimated Total Quote: $1,034.45"));
    }
}

use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::catalog::PackageId;
use crate::models::quote::{QuoteSummary, Selection};

/// Submission body for a booking enquiry: contact details plus the
/// pricing selection the visitor built up on the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnquiryInput {
    pub name: String,
    pub email_address: String,
    pub event_type: String,
    pub event_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub selection: Selection,
}

/// Persisted enquiry document. Append-only log; enquiries are never
/// updated or deleted once written.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingEnquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email_address: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub selected_package: PackageId,
    pub extra_hours: u32,
    pub add_ons: Vec<String>,
    pub quote: QuoteSummary,
    pub created_at: DateTime<Utc>,
}

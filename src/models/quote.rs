use serde::{Deserialize, Serialize};

use crate::models::catalog::PackageId;

/// One visitor's in-progress choice on the booking form. The form owns
/// this state and resubmits it on every change; nothing here is stored
/// until an enquiry is actually submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub selected_package: Option<PackageId>,
    #[serde(default)]
    pub extra_hours: u32,
    #[serde(default)]
    pub add_ons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnLine {
    pub name: String,
    pub price: f64,
}

/// Itemized price breakdown for one selection. Recomputed from scratch
/// on every change; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub package_name: String,
    pub package_price: f64,
    pub extra_hours_count: u32,
    pub extra_hours_price: f64,
    pub add_ons: Vec<AddOnLine>,
    pub add_ons_total: f64,
    pub add_ons_discount: f64,
    pub final_total: f64,
}

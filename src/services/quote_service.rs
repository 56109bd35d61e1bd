use crate::models::catalog::Catalog;
use crate::models::quote::{AddOnLine, QuoteSummary, Selection};

/// Flat rate per extra rental hour, on top of a package's base hours.
pub const EXTRA_HOUR_RATE: f64 = 99.0;

/// The booking form caps extra hours at this; handlers clamp to it
/// before quoting so the calculator never sees an out-of-range value.
pub const MAX_EXTRA_HOURS: u32 = 6;

/// Add-on bundle discount, keyed by how many add-ons are selected
/// (not by their price). Ordered ascending by count; lookup scans from
/// the highest threshold down, so five or six add-ons still land on
/// the 4+ tier.
const DISCOUNT_TIERS: [(usize, f64); 3] = [(2, 0.10), (3, 0.15), (4, 0.20)];

pub struct QuoteCalculator;

impl QuoteCalculator {
    /// Price a selection against the catalog.
    ///
    /// Returns `None` while the selection has no resolvable package —
    /// the normal state mid-form, not an error. Unknown add-on ids are
    /// dropped from both the line items and the discount count, and
    /// duplicate ids only count once. Pure and cheap enough to call on
    /// every form change.
    pub fn calculate(catalog: &Catalog, selection: &Selection) -> Option<QuoteSummary> {
        let package = catalog.find_package(selection.selected_package?)?;

        let extra_hours_count = selection.extra_hours;
        let extra_hours_price = extra_hours_count as f64 * EXTRA_HOUR_RATE;

        // Resolve add-ons in selection order, first occurrence wins.
        let mut seen: Vec<&str> = Vec::new();
        let mut add_ons: Vec<AddOnLine> = Vec::new();
        for id in &selection.add_ons {
            if seen.contains(&id.as_str()) {
                continue;
            }
            seen.push(id);
            if let Some(addon) = catalog.find_add_on(id) {
                add_ons.push(AddOnLine {
                    name: addon.name.clone(),
                    price: addon.price,
                });
            }
        }

        let add_ons_total: f64 = add_ons.iter().map(|line| line.price).sum();

        // Discount applies to the add-ons subtotal only, computed once
        // on the total. No rounding here; display formatting rounds.
        let add_ons_discount = add_ons_total * Self::discount_rate(add_ons.len());

        let final_total = package.price + extra_hours_price + add_ons_total - add_ons_discount;

        Some(QuoteSummary {
            package_name: package.name.clone(),
            package_price: package.price,
            extra_hours_count,
            extra_hours_price,
            add_ons,
            add_ons_total,
            add_ons_discount,
            final_total,
        })
    }

    fn discount_rate(add_on_count: usize) -> f64 {
        DISCOUNT_TIERS
            .iter()
            .rev()
            .find(|(threshold, _)| add_on_count >= *threshold)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }
}

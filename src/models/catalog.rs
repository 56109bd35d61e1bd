use serde::{Deserialize, Serialize};

/// Closed set of bookable package tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageId {
    Digital,
    Print,
    Ultimate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageFeature {
    pub text: String,
    pub included: bool,
    /// Points at the add-on that covers the same feature, when one exists.
    /// Lets the booking form flag overlap between a package and the add-on list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub price: f64,
    pub min_hours: u32,
    pub max_hours: u32,
    pub hours: String,
    pub features: Vec<PackageFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Static pricing data for the booking form. Built once at startup and
/// injected into the handlers; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub packages: Vec<Package>,
    pub add_ons: Vec<AddOn>,
    pub event_types: Vec<String>,
}

impl Catalog {
    pub fn find_package(&self, id: PackageId) -> Option<&Package> {
        self.packages.iter().find(|pkg| pkg.id == id)
    }

    pub fn find_add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|addon| addon.id == id)
    }

    /// Sanity checks on the static data. A broken catalog is a deploy
    /// problem, so main() runs this once at startup and refuses to boot
    /// on failure rather than mis-pricing quotes at request time.
    pub fn validate(&self) -> Result<(), String> {
        if self.packages.is_empty() {
            return Err("catalog has no packages".to_string());
        }
        if self.add_ons.is_empty() {
            return Err("catalog has no add-ons".to_string());
        }

        for (idx, pkg) in self.packages.iter().enumerate() {
            if self.packages[..idx].iter().any(|other| other.id == pkg.id) {
                return Err(format!("duplicate package id: {:?}", pkg.id));
            }
            if pkg.price < 0.0 {
                return Err(format!("package {} has a negative price", pkg.name));
            }
            if pkg.min_hours > pkg.max_hours {
                return Err(format!(
                    "package {} has min_hours {} > max_hours {}",
                    pkg.name, pkg.min_hours, pkg.max_hours
                ));
            }
            for feature in &pkg.features {
                if let Some(add_on_id) = &feature.add_on_id {
                    if self.find_add_on(add_on_id).is_none() {
                        return Err(format!(
                            "package {} feature '{}' references unknown add-on '{}'",
                            pkg.name, feature.text, add_on_id
                        ));
                    }
                }
            }
        }

        for (idx, addon) in self.add_ons.iter().enumerate() {
            if self.add_ons[..idx].iter().any(|other| other.id == addon.id) {
                return Err(format!("duplicate add-on id: {}", addon.id));
            }
            if addon.price < 0.0 {
                return Err(format!("add-on {} has a negative price", addon.id));
            }
        }

        Ok(())
    }

    /// The production catalog: three package tiers and ten add-ons with
    /// fixed whole-dollar prices. Price changes ship as a redeploy.
    pub fn standard() -> Self {
        Self {
            packages: vec![
                Package {
                    id: PackageId::Digital,
                    name: "Digital Package".to_string(),
                    price: 399.0,
                    min_hours: 1,
                    max_hours: 4,
                    hours: "1-4 Hours".to_string(),
                    features: vec![
                        feature("Instant Sharing (Wi-Fi Required)", true, Some("instant-sharing")),
                        feature("Boomerangs & GIFs", true, Some("boomerangs")),
                        feature("Customized Photo Template", true, Some("custom-template")),
                        feature("Prop Signs", true, Some("prop-signs")),
                        feature("No Prints", false, Some("unlimited-prints")),
                        feature("No Attendant", false, Some("attendant")),
                    ],
                },
                Package {
                    id: PackageId::Print,
                    name: "Print Package".to_string(),
                    price: 649.0,
                    min_hours: 2,
                    max_hours: 2,
                    hours: "2 Hours".to_string(),
                    features: vec![
                        feature("Unlimited Prints (2x6 Strips)", true, Some("unlimited-prints")),
                        feature("Instant Sharing (Wi-Fi Required)", true, Some("instant-sharing")),
                        feature("Customized Photo Template", true, Some("custom-template")),
                        feature("Prop Signs", true, Some("prop-signs")),
                        feature("Downloadable Photos", true, None),
                        feature("High Resolution Photos", true, None),
                        feature("On-Site Attendant", true, Some("attendant")),
                    ],
                },
                Package {
                    id: PackageId::Ultimate,
                    name: "Ultimate Package".to_string(),
                    price: 799.0,
                    min_hours: 1,
                    max_hours: 4,
                    hours: "1-4 Hours".to_string(),
                    features: vec![
                        feature("Unlimited Prints (2x6 or 4x6)", true, Some("unlimited-prints")),
                        feature("Instant Sharing (Wi-Fi Required)", true, Some("instant-sharing")),
                        feature("Boomerangs & GIFs", true, Some("boomerangs")),
                        feature("Customized Photo Template", true, Some("custom-template")),
                        feature("Prop Signs", true, Some("prop-signs")),
                        feature("USB Thumb Drive with All Photos", true, Some("usb-drive")),
                        feature("Video Guestbook", true, Some("video-guestbook")),
                        feature("On-Site Attendant", true, Some("attendant")),
                    ],
                },
            ],
            add_ons: vec![
                add_on("instant-sharing", "Instant Sharing", 49.0, Some("Wi-Fi Required")),
                add_on("custom-template", "Customized Photo Template", 39.0, None),
                add_on("unlimited-prints", "Unlimited Prints", 99.0, None),
                add_on("usb-drive", "USB Thumb Drive", 59.0, Some("With All Photos")),
                add_on("premium-backdrop", "Premium Backdrop", 149.0, None),
                add_on("boomerangs", "Boomerangs & GIFs", 69.0, None),
                add_on("prop-signs", "Prop Signs", 29.0, None),
                add_on("attendant", "On-Site Attendant", 129.0, None),
                add_on("video-guestbook", "Video Guestbook", 89.0, None),
                add_on("social-media", "Social Media Station", 125.0, None),
            ],
            event_types: [
                "Wedding",
                "Birthday",
                "Corporate",
                "Anniversary",
                "Graduation",
                "Holiday Party",
                "Reunion",
                "Other",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

fn feature(text: &str, included: bool, add_on_id: Option<&str>) -> PackageFeature {
    PackageFeature {
        text: text.to_string(),
        included,
        add_on_id: add_on_id.map(str::to_string),
    }
}

fn add_on(id: &str, name: &str, price: f64, description: Option<&str>) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.map(str::to_string),
    }
}

//! Content records for the marketing pages.
//!
//! These types define the data driving every page. They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can take data without borrowing issues
//! - **Default-able** - Build partial records with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use site_leptos::types::{CatalogSection, IndustryPage, ProductCard, ProductKind};
//!
//! let page = IndustryPage {
//!     slug: "hotels-and-restaurants".into(),
//!     hero_title: "Fire Extinguisher For Hotels & Restaurants".into(),
//!     breadcrumb: vec!["Home".into(), "Industries".into()],
//!     sections: vec![CatalogSection {
//!         title: "GUEST ROOMS".into(),
//!         cards: vec![ProductCard {
//!             label: "ABC Type".into(),
//!             image_url: "/public/placeholder.svg".into(),
//!             badges: vec!["Class A".into(), "CE".into()],
//!             cta_url: "#".into(),
//!             kind: Some(ProductKind::Extinguisher),
//!         }],
//!     }],
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Highlight tag shown above a product card's label.
///
/// The catalog distinguishes handheld extinguishers from installed
/// suppression systems; cards without a tag show neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    /// Handheld or trolley-mounted extinguisher
    #[serde(rename = "Fire Extinguisher")]
    Extinguisher,
    /// Installed suppression/flooding system
    #[serde(rename = "Fire System")]
    System,
}

impl ProductKind {
    /// Display string rendered on the card.
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Extinguisher => "Fire Extinguisher",
            ProductKind::System => "Fire System",
        }
    }
}

/// A single product tile: image, label, category badges, and a CTA link.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductCard {
    /// Product name shown on the tile (non-empty)
    pub label: String,
    /// Product image URL - site-relative or absolute, treated as opaque
    pub image_url: String,
    /// Fire-class / certification codes, rendered as one icon each.
    /// May be empty (suppression systems carry no badges).
    #[serde(default)]
    pub badges: Vec<String>,
    /// "Know More" link target
    pub cta_url: String,
    /// Optional highlight tag above the label
    pub kind: Option<ProductKind>,
}

/// A titled group of product cards for one physical area or use-case.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Heading, e.g. "PARKING" (unique within a page by convention)
    pub title: String,
    /// Cards in display order; may be empty
    #[serde(default)]
    pub cards: Vec<ProductCard>,
}

/// One complete page: hero, breadcrumb trail, and ordered catalog sections.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndustryPage {
    /// Route segment, e.g. "residential-societies"
    pub slug: String,
    /// Hero banner title
    pub hero_title: String,
    /// Hero background image - None falls back to a solid background
    pub hero_image_url: Option<String>,
    /// Trail rendered in the hero; first element links home
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    /// Catalog sections in display order; empty for plain pages (about)
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
}

impl IndustryPage {
    /// Total card count across all sections.
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

/// Icon asset URL for a badge code.
///
/// Codes map onto the deployed badge sprite set by lowercasing and
/// hyphenating ("Class A" -> `/public/badges/class-a.svg`). Unknown codes
/// still produce a URL; assets are a deployment concern, not runtime data.
pub fn badge_icon_url(code: &str) -> String {
    let slug: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("/public/badges/{slug}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_icon_url_slugifies_codes() {
        assert_eq!(badge_icon_url("Class A"), "/public/badges/class-a.svg");
        assert_eq!(badge_icon_url("Electrical"), "/public/badges/electrical.svg");
        assert_eq!(badge_icon_url("ISI"), "/public/badges/isi.svg");
    }

    #[test]
    fn product_kind_serializes_as_display_string() {
        let json = serde_json::to_string(&ProductKind::Extinguisher).unwrap();
        assert_eq!(json, "\"Fire Extinguisher\"");
        let json = serde_json::to_string(&ProductKind::System).unwrap();
        assert_eq!(json, "\"Fire System\"");
    }

    #[test]
    fn card_count_sums_sections() {
        let page = IndustryPage {
            sections: vec![
                CatalogSection {
                    title: "A".into(),
                    cards: vec![ProductCard::default(), ProductCard::default()],
                },
                CatalogSection {
                    title: "B".into(),
                    cards: vec![ProductCard::default()],
                },
            ],
            ..Default::default()
        };
        assert_eq!(page.card_count(), 3);
    }
}

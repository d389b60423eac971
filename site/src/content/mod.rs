//! Declarative content tables driving the generic renderers.
//!
//! One function per page returns its [`IndustryPage`] record; the registry
//! in [`all_pages`] is the single source of truth for routes. The records
//! are rebuilt identically on every call - there is no content lifecycle.

use crate::types::{CatalogSection, IndustryPage, ProductCard, ProductKind};

mod about;
mod hotels_restaurants;
mod residential_societies;

pub use about::about;
pub use hotels_restaurants::hotels_restaurants;
pub use residential_societies::residential_societies;

/// Product images in this catalog snapshot all point at the deployed
/// placeholder; the renderer treats the URL as opaque either way.
const PLACEHOLDER_IMG: &str = "/public/placeholder.svg";

/// Every registered page, in navigation order.
pub fn all_pages() -> Vec<IndustryPage> {
    vec![hotels_restaurants(), residential_societies(), about()]
}

/// Look up one page by its route slug.
pub fn page_by_slug(slug: &str) -> Option<IndustryPage> {
    all_pages().into_iter().find(|page| page.slug == slug)
}

fn section(title: &str, cards: Vec<ProductCard>) -> CatalogSection {
    CatalogSection {
        title: title.into(),
        cards,
    }
}

fn card(label: &str, badges: &[&str]) -> ProductCard {
    ProductCard {
        label: label.into(),
        image_url: PLACEHOLDER_IMG.into(),
        badges: badges.iter().map(|b| (*b).into()).collect(),
        cta_url: "#".into(),
        kind: None,
    }
}

fn tagged(kind: ProductKind, label: &str, badges: &[&str]) -> ProductCard {
    ProductCard {
        kind: Some(kind),
        ..card(label, badges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_slugs_are_unique() {
        let pages = all_pages();
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn page_by_slug_finds_registered_routes() {
        assert!(page_by_slug("hotels-and-restaurants").is_some());
        assert!(page_by_slug("residential-societies").is_some());
        assert!(page_by_slug("about").is_some());
        assert!(page_by_slug("no-such-page").is_none());
    }

    #[test]
    fn catalog_pages_carry_sections_and_trails() {
        for page in all_pages() {
            assert!(!page.hero_title.is_empty());
            assert!(!page.breadcrumb.is_empty());
            for section in &page.sections {
                assert!(!section.title.is_empty());
                for card in &section.cards {
                    assert!(!card.label.is_empty());
                    assert!(!card.image_url.is_empty());
                }
            }
        }
    }
}

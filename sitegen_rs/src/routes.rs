//! Route listing over the content registry.

use anyhow::Result;
use serde::Serialize;
use site_leptos::content;

/// One registered route, summarized for listings.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    /// Route slug (URL path segment)
    pub slug: String,
    /// Hero title
    pub title: String,
    /// Catalog section count
    pub sections: usize,
    /// Total product card count
    pub cards: usize,
}

/// Summaries for every registered page, in navigation order.
pub fn route_table() -> Vec<RouteInfo> {
    content::all_pages()
        .iter()
        .map(|page| RouteInfo {
            slug: page.slug.clone(),
            title: page.hero_title.clone(),
            sections: page.sections.len(),
            cards: page.card_count(),
        })
        .collect()
}

/// Print the route table, human-readable or as JSON.
pub fn print_routes(json: bool) -> Result<()> {
    let routes = route_table();
    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for route in &routes {
            println!(
                "/{:<26} {}  ({} sections, {} cards)",
                route.slug, route.title, route.sections, route.cards
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_covers_every_registered_page() {
        let routes = route_table();
        assert_eq!(routes.len(), content::all_pages().len());
        assert!(routes.iter().any(|r| r.slug == "hotels-and-restaurants"));
        assert!(routes.iter().any(|r| r.slug == "residential-societies"));
        assert!(routes.iter().any(|r| r.slug == "about"));
    }
}
